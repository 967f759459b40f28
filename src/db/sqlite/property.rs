//! SQLite PropertyRepository implementation.

use sqlx::FromRow;

use super::connection::SqliteUnitOfWork;
use crate::db::{
    DbError, DbResult, NewProperty, Property, PropertyPatch, PropertyQuery, PropertyRepository,
    PropertyStatus,
};

const SELECT_COLUMNS: &str = "SELECT id, city, price, rooms, status, description, features FROM properties";

/// Listings inserted by `seed` into an empty catalog.
const SAMPLES: &[(&str, &str, f64, i64, &str)] = &[
    ("prop_001", "Madrid", 300000.0, 2, "Bright apartment in downtown"),
    ("prop_002", "Barcelona", 450000.0, 3, "Penthouse with sea views"),
    ("prop_003", "Sevilla", 180000.0, 2, "Classic house in Santa Cruz"),
];

#[derive(FromRow)]
struct PropertyRow {
    id: String,
    city: String,
    price: f64,
    rooms: i64,
    status: String,
    description: String,
    features: String,
}

impl TryFrom<PropertyRow> for Property {
    type Error = DbError;

    fn try_from(row: PropertyRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse::<PropertyStatus>()
            .map_err(|_| DbError::InvalidData {
                message: format!(
                    "property '{}' has unrecognized stored status '{}'",
                    row.id, row.status
                ),
            })?;

        Ok(Property {
            id: row.id,
            city: row.city,
            price: row.price,
            rooms: row.rooms,
            status,
            description: row.description,
            features: row.features,
        })
    }
}

fn into_properties(rows: Vec<PropertyRow>) -> DbResult<Vec<Property>> {
    rows.into_iter().map(Property::try_from).collect()
}

fn require_id(id: &str) -> DbResult<()> {
    if id.trim().is_empty() {
        return Err(DbError::Validation {
            message: "The property_id cannot be empty.".to_string(),
        });
    }
    Ok(())
}

impl SqliteUnitOfWork {
    async fn insert(&mut self, property: &Property) -> DbResult<()> {
        sqlx::query(
            "INSERT INTO properties (id, city, price, rooms, status, description, features) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&property.id)
        .bind(&property.city)
        .bind(property.price)
        .bind(property.rooms)
        .bind(property.status.as_str())
        .bind(&property.description)
        .bind(&property.features)
        .execute(&mut *self.tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                DbError::AlreadyExists {
                    entity_type: "Property".to_string(),
                    id: property.id.clone(),
                }
            }
            other => other.into(),
        })?;
        Ok(())
    }
}

impl PropertyRepository for SqliteUnitOfWork {
    async fn list_all(&mut self) -> DbResult<Vec<Property>> {
        let rows = sqlx::query_as::<_, PropertyRow>(SELECT_COLUMNS)
            .fetch_all(&mut *self.tx)
            .await?;
        into_properties(rows)
    }

    async fn search(&mut self, query: &PropertyQuery) -> DbResult<Vec<Property>> {
        let status = PropertyStatus::resolve_lenient(&query.status);
        let city = query.city.as_deref().filter(|c| !c.is_empty());

        let mut sql = format!("{} WHERE status = ? AND price >= ? AND price <= ?", SELECT_COLUMNS);
        if city.is_some() {
            sql.push_str(" AND LOWER(city) LIKE '%' || LOWER(?) || '%'");
        }

        let mut statement = sqlx::query_as::<_, PropertyRow>(&sql)
            .bind(status.as_str())
            .bind(query.min_price)
            .bind(query.max_price);
        if let Some(city) = city {
            statement = statement.bind(city);
        }

        let rows = statement.fetch_all(&mut *self.tx).await?;
        into_properties(rows)
    }

    async fn get(&mut self, id: &str) -> DbResult<Option<Property>> {
        let sql = format!("{} WHERE id = ?", SELECT_COLUMNS);
        let row = sqlx::query_as::<_, PropertyRow>(&sql)
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await?;
        row.map(Property::try_from).transpose()
    }

    async fn create(&mut self, new: &NewProperty) -> DbResult<Property> {
        require_id(&new.id)?;
        let status = new.status.parse::<PropertyStatus>()?;

        let property = Property {
            id: new.id.clone(),
            city: new.city.clone(),
            price: new.price,
            rooms: new.rooms,
            status,
            description: new.description.clone(),
            features: new.features.clone(),
        };
        self.insert(&property).await?;
        Ok(property)
    }

    async fn update(&mut self, id: &str, patch: &PropertyPatch) -> DbResult<Option<Property>> {
        let Some(mut property) = self.get(id).await? else {
            return Ok(None);
        };

        patch.apply(&mut property)?;

        sqlx::query(
            "UPDATE properties SET city = ?, price = ?, rooms = ?, status = ?, \
             description = ?, features = ? WHERE id = ?",
        )
        .bind(&property.city)
        .bind(property.price)
        .bind(property.rooms)
        .bind(property.status.as_str())
        .bind(&property.description)
        .bind(&property.features)
        .bind(&property.id)
        .execute(&mut *self.tx)
        .await?;

        Ok(Some(property))
    }

    async fn delete(&mut self, id: &str) -> DbResult<bool> {
        require_id(id)?;

        let result = sqlx::query("DELETE FROM properties WHERE id = ?")
            .bind(id)
            .execute(&mut *self.tx)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn seed(&mut self) -> DbResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM properties")
            .fetch_one(&mut *self.tx)
            .await?;
        if count > 0 {
            return Ok(false);
        }

        for (id, city, price, rooms, description) in SAMPLES {
            let property = Property {
                id: id.to_string(),
                city: city.to_string(),
                price: *price,
                rooms: *rooms,
                status: PropertyStatus::Available,
                description: description.to_string(),
                features: String::new(),
            };
            self.insert(&property).await?;
        }
        Ok(true)
    }
}

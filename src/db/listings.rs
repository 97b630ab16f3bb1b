use rusqlite::{params, Connection, OptionalExtension, Row, TransactionBehavior};
use tracing::debug;

use crate::db::connection::{init_db, Database};
use crate::db::{new_id, ListingStore};
use crate::domain::{Listing, ListingPatch, NewListing};
use crate::errors::AppError;

const SELECT_COLUMNS: &str =
    "select id, title, description, image, price, location, country from listings";

/// Listings persisted in a SQLite file.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    /// Wraps `db` after making sure the schema exists.
    pub fn open(db: Database) -> Result<Self, AppError> {
        init_db(&db)?;
        Ok(Self { db })
    }
}

fn row_to_listing(row: &Row<'_>) -> rusqlite::Result<Listing> {
    Ok(Listing {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        image: row.get(3)?,
        price: row.get(4)?,
        location: row.get(5)?,
        country: row.get(6)?,
    })
}

fn find_listing(conn: &Connection, id: &str) -> Result<Option<Listing>, AppError> {
    let listing = conn
        .query_row(
            &format!("{SELECT_COLUMNS} where id = ?"),
            params![id],
            row_to_listing,
        )
        .optional()?;
    Ok(listing)
}

impl ListingStore for SqliteStore {
    fn create(&self, new: NewListing) -> Result<Listing, AppError> {
        let listing = new.into_listing(new_id());

        self.db.with_conn(|conn| {
            conn.execute(
                r#"
                insert into listings (id, title, description, image, price, location, country)
                values (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                "#,
                params![
                    listing.id,
                    listing.title,
                    listing.description,
                    listing.image,
                    listing.price,
                    listing.location,
                    listing.country,
                ],
            )?;
            Ok(())
        })?;

        debug!(id = %listing.id, "inserted listing row");
        Ok(listing)
    }

    fn list_all(&self) -> Result<Vec<Listing>, AppError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} order by seq"))?;
            let rows = stmt.query_map([], row_to_listing)?;

            let mut out = Vec::new();
            for r in rows {
                out.push(r?);
            }
            Ok(out)
        })
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Listing>, AppError> {
        self.db.with_conn(|conn| find_listing(conn, id))
    }

    fn update_by_id(&self, id: &str, patch: &ListingPatch) -> Result<Option<Listing>, AppError> {
        self.db.with_conn(|conn| {
            // Take the write lock up front; a deferred read-then-write cannot
            // be upgraded while another worker holds it and fails with BUSY.
            let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

            let Some(mut listing) = find_listing(&tx, id)? else {
                return Ok(None);
            };
            patch.apply(&mut listing);

            tx.execute(
                r#"
                update listings
                set title = ?2, description = ?3, image = ?4, price = ?5,
                    location = ?6, country = ?7
                where id = ?1
                "#,
                params![
                    listing.id,
                    listing.title,
                    listing.description,
                    listing.image,
                    listing.price,
                    listing.location,
                    listing.country,
                ],
            )?;
            tx.commit()?;

            Ok(Some(listing))
        })
    }

    fn delete_by_id(&self, id: &str) -> Result<bool, AppError> {
        self.db.with_conn(|conn| {
            let removed = conn.execute("delete from listings where id = ?", params![id])?;
            Ok(removed > 0)
        })
    }
}

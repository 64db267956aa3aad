//! Demo catalog for local development.
//!
//! Only runs against an empty `services` table, so restarting with
//! `seed_demo = true` never duplicates rows.

use chrono::{Days, NaiveDate, NaiveTime};
use sqlx::SqlitePool;

use beautycare_domain::error::BeautyCareError;
use beautycare_domain::gallery::GalleryImage;
use beautycare_domain::service::Service;
use beautycare_domain::slot::Slot;

use crate::error::StorageError;
use crate::gallery_repo::SqliteGalleryRepository;
use crate::service_repo::SqliteServiceRepository;
use crate::slot_repo::SqliteSlotRepository;

/// Days, starting today, that receive demo slots.
pub const SLOT_DAYS: u64 = 14;

const OPENING_HOUR: u32 = 10;
const CLOSING_HOUR: u32 = 19;

/// Errors raised while seeding.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("invalid demo record")]
    Invalid(#[from] BeautyCareError),
}

fn demo_services() -> Result<Vec<Service>, BeautyCareError> {
    Ok(vec![
        Service::builder()
            .name("Haircut & Styling")
            .description("Precision cut finished with a blow-dry.")
            .category("hair")
            .duration("45 mins")
            .price("₹600")
            .build()?,
        Service::builder()
            .name("Hair Coloring")
            .description("Global color or highlights with ammonia-free products.")
            .category("hair")
            .duration("2 hours")
            .price("₹2,500")
            .detail("Global color")
            .detail("Highlights")
            .detail("Root touch-up")
            .build()?,
        Service::builder()
            .name("Gold Facial")
            .description("Brightening facial with a gold-infused mask.")
            .category("skin")
            .duration("60 mins")
            .price("₹1,500")
            .build()?,
        Service::builder()
            .name("Threading")
            .description("Clean shaping with cotton thread.")
            .category("face")
            .duration("15 mins")
            .price("₹50")
            .detail("Eyebrows")
            .detail("Upper lip")
            .detail("Full face")
            .build()?,
        Service::builder()
            .name("Bridal Makeup")
            .description("Complete bridal look with trial session.")
            .category("bridal")
            .duration("3 hours")
            .price("₹15,000")
            .detail("HD makeup")
            .detail("Hair styling")
            .detail("Draping")
            .build()?,
        Service::builder()
            .name("Mehandhi")
            .description("Traditional and contemporary henna designs.")
            .category("bridal")
            .duration("2 hours")
            .price("₹3,000")
            .build()?,
    ])
}

fn demo_gallery() -> Result<Vec<GalleryImage>, BeautyCareError> {
    Ok(vec![
        GalleryImage::new("/static/img/hair.jpg", "hair", "Layered cut with soft waves")?,
        GalleryImage::new("/static/img/bridal.jpg", "bridal", "Bridal look with draping")?,
        GalleryImage::new("/static/img/facial.jpg", "skin", "Facial treatment room")?,
        GalleryImage::new("/static/img/mehandhi.jpg", "bridal", "Full-hand mehandhi design")?,
    ])
}

fn demo_slots(today: NaiveDate) -> Result<Vec<Slot>, BeautyCareError> {
    let mut slots = Vec::new();
    for offset in 0..SLOT_DAYS {
        let Some(day) = today.checked_add_days(Days::new(offset)) else {
            break;
        };
        for hour in OPENING_HOUR..CLOSING_HOUR {
            let (Some(start), Some(end)) = (
                NaiveTime::from_hms_opt(hour, 0, 0),
                NaiveTime::from_hms_opt(hour + 1, 0, 0),
            ) else {
                continue;
            };
            slots.push(Slot::open(day, start, end)?);
        }
    }
    Ok(slots)
}

/// Fill an empty database with a small catalog, a gallery and hourly slots
/// for the next [`SLOT_DAYS`] days. Returns `false` when services already
/// exist and nothing was written.
///
/// # Errors
///
/// Returns [`SeedError`] when a write fails.
pub async fn seed_demo(pool: &SqlitePool, today: NaiveDate) -> Result<bool, SeedError> {
    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM services")
        .fetch_one(pool)
        .await
        .map_err(StorageError::from)?;
    if existing > 0 {
        tracing::debug!(existing, "catalog already populated, skipping demo seed");
        return Ok(false);
    }

    let services = SqliteServiceRepository::new(pool.clone());
    for service in demo_services()? {
        services.insert(&service).await?;
    }

    let gallery = SqliteGalleryRepository::new(pool.clone());
    for image in demo_gallery()? {
        gallery.insert(&image).await?;
    }

    let slots = SqliteSlotRepository::new(pool.clone());
    let demo_slots = demo_slots(today)?;
    let slot_count = demo_slots.len();
    for slot in &demo_slots {
        slots.insert(slot).await?;
    }

    tracing::info!(slots = slot_count, "demo catalog seeded");
    Ok(true)
}

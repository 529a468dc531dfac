//! Listing repository: every mutation transforms the in-memory collection and
//! leaves persistence to the command layer, so one save covers one operation.
//!
//! Status transitions are the moderation state machine from the product rules:
//! `active -> flagged` when the report threshold is met, `flagged -> active`
//! on admin approval (reports cleared), any non-deleted state `-> deleted` on
//! removal. `deleted` is terminal.

use crate::domain::models::{Limits, Listing, ListingDraft, ListingStatus, Rating, State, User};
use crate::error::AppError;
use chrono::Utc;
use uuid::Uuid;

pub fn find_listing<'a>(state: &'a State, id: &str) -> anyhow::Result<&'a Listing> {
    state
        .services
        .iter()
        .find(|l| l.id == id)
        .ok_or_else(|| AppError::NotFound("listing", id.to_string()).into())
}

fn find_listing_mut<'a>(state: &'a mut State, id: &str) -> anyhow::Result<&'a mut Listing> {
    state
        .services
        .iter_mut()
        .find(|l| l.id == id)
        .ok_or_else(|| AppError::NotFound("listing", id.to_string()).into())
}

/// Deleted listings are kept as an audit trail but behave as gone for every
/// user-facing operation.
fn find_live_mut<'a>(state: &'a mut State, id: &str) -> anyhow::Result<&'a mut Listing> {
    let listing = find_listing_mut(state, id)?;
    if listing.status.is_terminal() {
        return Err(AppError::NotFound("listing", id.to_string()).into());
    }
    Ok(listing)
}

pub fn validate_draft(draft: &ListingDraft, limits: &Limits) -> Result<(), AppError> {
    if draft.title.trim().is_empty() {
        return Err(AppError::Validation("title is required".to_string()));
    }
    if draft.description.trim().is_empty() {
        return Err(AppError::Validation("description is required".to_string()));
    }
    if draft.contact.trim().is_empty() {
        return Err(AppError::Validation("contact is required".to_string()));
    }
    if draft.photo.is_none() && !draft.gallery.is_empty() {
        return Err(AppError::Validation(
            "gallery images require a primary photo".to_string(),
        ));
    }
    let image_count = usize::from(draft.photo.is_some()) + draft.gallery.len();
    if image_count > limits.max_listing_images {
        return Err(AppError::Validation(format!(
            "at most {} images per listing",
            limits.max_listing_images
        )));
    }
    if let Some(url) = &draft.map_url {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AppError::Validation("map_url must be an http(s) URL".to_string()));
        }
    }
    Ok(())
}

/// Listings this provider created on the current UTC calendar day, in any
/// status. Soft-deleted listings still count, so deleting and re-posting does
/// not stretch the daily quota.
pub fn todays_posts(state: &State, provider_id: &str) -> usize {
    let today = Utc::now().date_naive();
    state
        .services
        .iter()
        .filter(|l| l.provider_id == provider_id && l.created_on(today))
        .count()
}

pub fn add_listing(state: &mut State, owner: &User, draft: ListingDraft) -> Listing {
    let listing = Listing {
        id: format!("svc_{}", Uuid::new_v4().simple()),
        provider_id: owner.id.clone(),
        provider_name: owner.name.clone(),
        title: draft.title,
        category: draft.category,
        description: draft.description,
        price: draft.price,
        contact: draft.contact,
        photo: draft.photo,
        gallery: draft.gallery,
        map_url: draft.map_url,
        ratings: vec![],
        reports: vec![],
        created_at: Utc::now(),
        status: ListingStatus::Active,
    };
    state.services.push(listing.clone());
    listing
}

/// Full replace of the provider-controlled fields. Ownership is the caller's
/// responsibility; ratings, reports, status and timestamps are untouchable.
pub fn update_listing(state: &mut State, id: &str, draft: ListingDraft) -> anyhow::Result<Listing> {
    let listing = find_live_mut(state, id)?;
    listing.title = draft.title;
    listing.category = draft.category;
    listing.description = draft.description;
    listing.price = draft.price;
    listing.contact = draft.contact;
    listing.photo = draft.photo;
    listing.gallery = draft.gallery;
    listing.map_url = draft.map_url;
    Ok(listing.clone())
}

/// Soft delete: the record stays in storage but leaves every view. Repeating
/// the call is a no-op, and nothing ever moves a listing out of `deleted`.
pub fn soft_delete(state: &mut State, id: &str) -> anyhow::Result<Listing> {
    let listing = find_listing_mut(state, id)?;
    listing.status = ListingStatus::Deleted;
    Ok(listing.clone())
}

pub fn add_rating(
    state: &mut State,
    id: &str,
    rater: &User,
    stars: u8,
    comment: Option<String>,
) -> anyhow::Result<Listing> {
    if !(1..=5).contains(&stars) {
        return Err(AppError::Validation("stars must be between 1 and 5".to_string()).into());
    }
    let listing = find_live_mut(state, id)?;
    if listing.provider_id == rater.id {
        return Err(AppError::Conflict("you cannot rate your own listing".to_string()).into());
    }
    if listing.ratings.iter().any(|r| r.user_id == rater.id) {
        return Err(AppError::Conflict("you already rated this listing".to_string()).into());
    }
    listing.ratings.push(Rating {
        user_id: rater.id.clone(),
        rating: stars,
        comment,
        date: Utc::now(),
    });
    Ok(listing.clone())
}

pub fn report_listing(
    state: &mut State,
    id: &str,
    reporter: &User,
    threshold: usize,
) -> anyhow::Result<Listing> {
    let listing = find_live_mut(state, id)?;
    if listing.provider_id == reporter.id {
        return Err(AppError::Conflict("you cannot report your own listing".to_string()).into());
    }
    if listing.reports.iter().any(|r| r == &reporter.id) {
        return Err(AppError::Conflict("you already reported this listing".to_string()).into());
    }
    listing.reports.push(reporter.id.clone());
    if listing.reports.len() >= threshold {
        listing.status = ListingStatus::Flagged;
    }
    Ok(listing.clone())
}

/// Admin resolution of a report pile: reports are wiped and the listing goes
/// back to public browse.
pub fn approve_listing(state: &mut State, id: &str) -> anyhow::Result<Listing> {
    let listing = find_listing_mut(state, id)?;
    if listing.status.is_terminal() {
        return Err(AppError::Conflict("listing is deleted".to_string()).into());
    }
    listing.reports.clear();
    listing.status = ListingStatus::Active;
    Ok(listing.clone())
}

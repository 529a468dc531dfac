//! Read paths over the listing collection: public browse, detail visibility,
//! profile views. Pure functions; the command layer turns the results into
//! output rows.

use crate::cli::SortKey;
use crate::domain::models::{BrowseRow, Category, Listing, ListingStatus, User};

/// Public browse set: active listings carrying a primary photo, narrowed by a
/// case-insensitive title/description search and an optional category.
pub fn browse<'a>(
    services: &'a [Listing],
    query: Option<&str>,
    category: Option<Category>,
) -> Vec<&'a Listing> {
    let needle = query.map(str::to_lowercase);
    services
        .iter()
        .filter(|l| l.status == ListingStatus::Active && l.photo.is_some())
        .filter(|l| match &needle {
            None => true,
            Some(q) => {
                l.title.to_lowercase().contains(q) || l.description.to_lowercase().contains(q)
            }
        })
        .filter(|l| category.map(|c| l.category == c).unwrap_or(true))
        .collect()
}

pub fn sort_listings(listings: &mut [&Listing], key: SortKey) {
    match key {
        SortKey::Newest => {
            listings.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)))
        }
        SortKey::Rating => listings.sort_by(|a, b| {
            b.mean_rating()
                .total_cmp(&a.mean_rating())
                .then(a.id.cmp(&b.id))
        }),
        SortKey::PriceAsc => {
            listings.sort_by(|a, b| a.price.cmp(&b.price).then(a.id.cmp(&b.id)))
        }
    }
}

/// Detail visibility: flagged listings stay visible to their owner and to
/// admins only; deleted listings are gone for everyone.
pub fn visible_to(listing: &Listing, viewer: Option<&User>) -> bool {
    match listing.status {
        ListingStatus::Active => true,
        ListingStatus::Flagged => viewer
            .map(|u| u.is_admin() || u.id == listing.provider_id)
            .unwrap_or(false),
        ListingStatus::Deleted => false,
    }
}

/// A provider's own non-deleted listings, flagged ones included.
pub fn profile_rows(services: &[Listing], provider_id: &str) -> Vec<BrowseRow> {
    services
        .iter()
        .filter(|l| l.provider_id == provider_id && l.status != ListingStatus::Deleted)
        .map(BrowseRow::from_listing)
        .collect()
}

/// Resolves favorite ids against the collection, dropping ids that no longer
/// point at a non-deleted listing.
pub fn favorite_rows(services: &[Listing], favorite_ids: &[String]) -> Vec<BrowseRow> {
    favorite_ids
        .iter()
        .filter_map(|id| services.iter().find(|l| &l.id == id))
        .filter(|l| l.status != ListingStatus::Deleted)
        .map(BrowseRow::from_listing)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Rating, Role};
    use chrono::{Duration, Utc};

    fn listing(id: &str, title: &str, price: u64, days_ago: i64) -> Listing {
        Listing {
            id: id.to_string(),
            provider_id: "p1".to_string(),
            provider_name: "Provider".to_string(),
            title: title.to_string(),
            category: Category::Design,
            description: "banner and logo work".to_string(),
            price,
            contact: "contact".to_string(),
            photo: Some("https://img.example/x.jpg".to_string()),
            gallery: vec![],
            map_url: None,
            ratings: vec![],
            reports: vec![],
            created_at: Utc::now() - Duration::days(days_ago),
            status: ListingStatus::Active,
        }
    }

    fn rated(mut l: Listing, stars: &[u8]) -> Listing {
        for (i, s) in stars.iter().enumerate() {
            l.ratings.push(Rating {
                user_id: format!("rater_{i}"),
                rating: *s,
                comment: None,
                date: Utc::now(),
            });
        }
        l
    }

    fn viewer(id: &str, role: Role) -> User {
        User {
            id: id.to_string(),
            name: "Viewer".to_string(),
            email: "v@campus.example".to_string(),
            nim: "88880000".to_string(),
            password_hash: "sha256$00$00".to_string(),
            is_verified: true,
            role,
        }
    }

    #[test]
    fn browse_hides_flagged_deleted_and_photoless() {
        let mut flagged = listing("a", "flagged one", 10, 1);
        flagged.status = ListingStatus::Flagged;
        let mut deleted = listing("b", "deleted one", 10, 1);
        deleted.status = ListingStatus::Deleted;
        let mut photoless = listing("c", "no photo", 10, 1);
        photoless.photo = None;
        let visible = listing("d", "visible", 10, 1);

        let services = vec![flagged, deleted, photoless, visible];
        let rows = browse(&services, None, None);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "d");
    }

    #[test]
    fn browse_search_matches_title_or_description_case_insensitively() {
        let services = vec![
            listing("a", "Poster PRINTING", 10, 1),
            listing("b", "tutoring", 10, 1),
        ];
        assert_eq!(browse(&services, Some("printing"), None).len(), 1);
        // "banner" only appears in the description.
        assert_eq!(browse(&services, Some("BANNER"), None).len(), 2);
        assert_eq!(browse(&services, Some("nothing"), None).len(), 0);
    }

    #[test]
    fn sort_orders_by_key() {
        let a = rated(listing("a", "avg four", 300, 3), &[4]);
        let b = rated(listing("b", "avg five", 100, 2), &[5, 5]);
        let c = listing("c", "unrated", 200, 1);
        let services = vec![a, b, c];

        let mut rows = browse(&services, None, None);
        sort_listings(&mut rows, SortKey::Newest);
        assert_eq!(rows[0].id, "c");

        sort_listings(&mut rows, SortKey::Rating);
        let ids: Vec<&str> = rows.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);

        sort_listings(&mut rows, SortKey::PriceAsc);
        let ids: Vec<&str> = rows.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn flagged_detail_is_owner_or_admin_only() {
        let mut l = listing("a", "flagged", 10, 1);
        l.status = ListingStatus::Flagged;

        assert!(!visible_to(&l, None));
        assert!(!visible_to(&l, Some(&viewer("someone", Role::Student))));
        assert!(visible_to(&l, Some(&viewer("p1", Role::Student))));
        assert!(visible_to(&l, Some(&viewer("mod", Role::Admin))));
    }

    #[test]
    fn profile_includes_flagged_but_not_deleted() {
        let active = listing("a", "active", 10, 1);
        let mut flagged = listing("b", "flagged", 10, 1);
        flagged.status = ListingStatus::Flagged;
        let mut deleted = listing("c", "deleted", 10, 1);
        deleted.status = ListingStatus::Deleted;

        let services = vec![active, flagged, deleted];
        let rows = profile_rows(&services, "p1");
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn favorites_drop_stale_ids() {
        let active = listing("a", "active", 10, 1);
        let mut deleted = listing("b", "deleted", 10, 1);
        deleted.status = ListingStatus::Deleted;
        let services = vec![active, deleted];

        let ids = vec!["a".to_string(), "b".to_string(), "gone".to_string()];
        let rows = favorite_rows(&services, &ids);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "a");
    }
}

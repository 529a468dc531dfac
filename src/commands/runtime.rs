use crate::*;

pub fn handle_runtime_commands(cli: &Cli, state: &mut State, limits: &Limits) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Browse {
            query,
            category,
            sort,
        } => {
            let mut hits = browse(&state.services, query.as_deref(), *category);
            sort_listings(&mut hits, *sort);
            let rows: Vec<BrowseRow> = hits.iter().map(|l| BrowseRow::from_listing(l)).collect();
            print_out(cli.json, &rows, |r| {
                format!(
                    "{}\t{}\t{:?}\t{}\t{:.1} ({})",
                    r.id, r.title, r.category, r.price, r.mean_rating, r.ratings_count
                )
            })?;
        }
        Commands::Show { listing } => {
            let viewer = session_user(state)?;
            let found = find_listing(state, listing)?;
            if !visible_to(found, viewer.as_ref()) {
                return Err(AppError::NotFound("listing", listing.clone()).into());
            }
            let report = ShowReport {
                mean_rating: found.mean_rating(),
                favorite: is_favorite(&found.id)?,
                listing: found.clone(),
            };
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: report
                    })?
                );
            } else {
                let l = &report.listing;
                println!("title: {}", l.title);
                println!("provider: {}", l.provider_name);
                println!("category: {:?}", l.category);
                println!("price: {}", l.price);
                println!("contact: {}", l.contact);
                println!(
                    "rating: {:.1} ({} ratings)",
                    report.mean_rating,
                    l.ratings.len()
                );
                if let Some(url) = &l.map_url {
                    println!("map: {}", url);
                }
                println!("description: {}", l.description);
            }
        }
        Commands::Post {
            title,
            category,
            description,
            price,
            contact,
            photo,
            gallery,
            map_url,
        } => {
            let user = require_session(state)?;
            let draft = ListingDraft {
                title: title.clone(),
                category: *category,
                description: description.clone(),
                price: *price,
                contact: contact.clone(),
                photo: photo.clone(),
                gallery: gallery.clone(),
                map_url: map_url.clone(),
            };
            validate_draft(&draft, limits)?;
            // Quota is a posting policy; the repository itself does not check it.
            if todays_posts(state, &user.id) >= limits.max_posts_per_day {
                return Err(AppError::QuotaExceeded(limits.max_posts_per_day).into());
            }
            let listing = add_listing(state, &user, draft);
            save_services(state)?;
            audit(
                "post",
                serde_json::json!({ "listing": listing.id, "provider": user.id }),
            );
            print_one(cli.json, listing, |l| {
                format!("posted {} ({})", l.title, l.id)
            })?;
        }
        Commands::Edit {
            listing,
            title,
            category,
            description,
            price,
            contact,
            photo,
            gallery,
            map_url,
        } => {
            let user = require_session(state)?;
            let current = find_listing(state, listing)?.clone();
            if current.status.is_terminal() {
                return Err(AppError::NotFound("listing", listing.clone()).into());
            }
            if current.provider_id != user.id {
                return Err(
                    AppError::Unauthorized("only the owner can edit a listing".to_string()).into(),
                );
            }
            let draft = ListingDraft {
                title: title.clone().unwrap_or(current.title),
                category: (*category).unwrap_or(current.category),
                description: description.clone().unwrap_or(current.description),
                price: (*price).unwrap_or(current.price),
                contact: contact.clone().unwrap_or(current.contact),
                photo: photo.clone().or(current.photo),
                gallery: gallery.clone().unwrap_or(current.gallery),
                map_url: map_url.clone().or(current.map_url),
            };
            validate_draft(&draft, limits)?;
            let updated = update_listing(state, listing, draft)?;
            save_services(state)?;
            audit(
                "edit",
                serde_json::json!({ "listing": updated.id, "provider": user.id }),
            );
            print_one(cli.json, updated, |l| {
                format!("updated {} ({})", l.title, l.id)
            })?;
        }
        Commands::Remove { listing } => {
            let user = require_session(state)?;
            let current = find_listing(state, listing)?;
            if current.provider_id != user.id && !user.is_admin() {
                return Err(AppError::Unauthorized(
                    "only the owner can remove a listing".to_string(),
                )
                .into());
            }
            let removed = soft_delete(state, listing)?;
            save_services(state)?;
            audit(
                "remove",
                serde_json::json!({ "listing": removed.id, "user": user.id }),
            );
            print_one(cli.json, removed, |l| {
                format!("removed {} ({})", l.title, l.id)
            })?;
        }
        Commands::Rate {
            listing,
            stars,
            comment,
        } => {
            let user = require_session(state)?;
            let rated = add_rating(state, listing, &user, *stars, comment.clone())?;
            save_services(state)?;
            audit(
                "rate",
                serde_json::json!({ "listing": rated.id, "user": user.id, "stars": stars }),
            );
            print_one(cli.json, rated, |l| {
                format!(
                    "rated {}, now {:.1} from {} ratings",
                    l.title,
                    l.mean_rating(),
                    l.ratings.len()
                )
            })?;
        }
        Commands::Report { listing } => {
            let user = require_session(state)?;
            let reported = report_listing(state, listing, &user, limits.report_threshold)?;
            save_services(state)?;
            audit(
                "report",
                serde_json::json!({
                    "listing": reported.id,
                    "user": user.id,
                    "reports": reported.reports.len()
                }),
            );
            print_one(cli.json, reported, |l| {
                if l.status == ListingStatus::Flagged {
                    format!("reported {}, listing is now under review", l.title)
                } else {
                    format!("reported {}", l.title)
                }
            })?;
        }
        Commands::Favorite { command } => match command {
            FavoriteCommands::Add { listing } => {
                let found = find_listing(state, listing)?;
                if found.status.is_terminal() {
                    return Err(AppError::NotFound("listing", listing.clone()).into());
                }
                let added = add_favorite(&found.id)?;
                print_one(cli.json, added, |a| {
                    if *a {
                        "added to favorites".to_string()
                    } else {
                        "already a favorite".to_string()
                    }
                })?;
            }
            FavoriteCommands::Remove { listing } => {
                let removed = remove_favorite(listing)?;
                print_one(cli.json, removed, |r| {
                    if *r {
                        "removed from favorites".to_string()
                    } else {
                        "not a favorite".to_string()
                    }
                })?;
            }
            FavoriteCommands::List => {
                let favorites = load_favorites()?;
                let rows = favorite_rows(&state.services, &favorites);
                print_out(cli.json, &rows, |r| {
                    format!("{}\t{}\t{}", r.id, r.title, r.provider_name)
                })?;
            }
        },
        Commands::Profile => {
            let user = require_session(state)?;
            let report = ProfileReport {
                listings: profile_rows(&state.services, &user.id),
                favorites: favorite_rows(&state.services, &load_favorites()?),
                user: user.summary(),
            };
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: report
                    })?
                );
            } else {
                println!("name: {}", report.user.name);
                println!("email: {}", report.user.email);
                println!("nim: {}", report.user.nim);
                println!("listings: {}", report.listings.len());
                for r in &report.listings {
                    println!("- {}\t{}", r.id, r.title);
                }
                println!("favorites: {}", report.favorites.len());
                for r in &report.favorites {
                    println!("- {}\t{}", r.id, r.title);
                }
            }
        }
        Commands::Register { .. }
        | Commands::Login { .. }
        | Commands::Logout
        | Commands::Whoami
        | Commands::Admin { .. } => {
            unreachable!("handled earlier in dispatch")
        }
    }

    Ok(())
}

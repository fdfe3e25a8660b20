use std::sync::Arc;

use finder::{Coord, FinderError, RadiusMiles, SearchState, view};
use widgets::local;

use crate::cli::{ChurchesCommand, SearchOutput};
use crate::error::CliError;
use crate::locate::HttpLocator;
use crate::services::finder::ChurchFinder;
use crate::state::AppState;

pub async fn run(state: &AppState, cmd: ChurchesCommand) -> Result<(), CliError> {
    let locator = Arc::new(HttpLocator::from_config(&state.config.locate)?);
    match cmd {
        ChurchesCommand::Near { lat, lon, output } => {
            let coord = Coord::new(lat, lon)?;
            let finder = ChurchFinder::new(locator, radius(state, &output)?);
            let result = finder.search_near(coord).await;
            report(&finder, result, &output).await
        }
        ChurchesCommand::City { name, output } => {
            let query = match name {
                Some(name) => name,
                None => local::place_query(&state.storage.load(&local::CITY)?, &state.storage.load(&local::REGION)?),
            };
            let finder = ChurchFinder::new(locator, radius(state, &output)?);
            let result = finder.search_city(&query).await?;
            report(&finder, result, &output).await
        }
    }
}

fn radius(state: &AppState, output: &SearchOutput) -> Result<RadiusMiles, CliError> {
    match output.radius {
        Some(miles) => Ok(RadiusMiles::new(miles)?),
        None => Ok(state.config.default_radius),
    }
}

async fn report(finder: &ChurchFinder, result: Option<SearchState>, output: &SearchOutput) -> Result<(), CliError> {
    let mut search = match result {
        Some(search) => search,
        None => finder.snapshot().await,
    };

    // `--focus` only applies to a result list; any other outcome reports its
    // own status instead.
    let focused = match output.focus {
        Some(n) if matches!(search, SearchState::Results { .. }) => {
            let index = n.checked_sub(1).ok_or(FinderError::NoSuchResult(n))?;
            let marker = finder.focus(index).await.map_err(|_| FinderError::NoSuchResult(n))?;
            search = finder.snapshot().await;
            Some(marker)
        }
        Some(n) => {
            tracing::debug!(focus = n, "no results to focus");
            None
        }
        None => None,
    };

    if output.json {
        println!("{}", serde_json::to_string_pretty(&search)?);
    } else {
        match &search {
            SearchState::Results { view } => {
                print!("{}", view::render_text(view));
                if let Some(marker) = &focused {
                    println!("\nSelected: {}", marker.popup.replace('\n', " · "));
                    println!("Map: {} (zoom {})", view.map.center, view.map.zoom);
                }
            }
            SearchState::Error { .. } => {}
            other => println!("{}", other.status_line()),
        }
    }

    match search {
        SearchState::Error { message, .. } => Err(CliError::Search(message)),
        _ => Ok(()),
    }
}

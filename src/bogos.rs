//! Core scraping: fetch the sales page, walk its promo tiles, and classify
//! each tile's sale text into a BOGO kind.

use std::time::Duration;

use reqwest::blocking::Client;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ExtractionError, FetchError};
use crate::matching::is_any_in_text;

/// How long to wait on the sales page request before giving up.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Kind of promotion attached to a sale tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BogoKind {
    /// Not a buy-N-get-one promotion
    None,
    /// Buy one get one free
    Bogo,
    /// Buy two get one free
    B2g1,
}

impl BogoKind {
    /// Display token used in published text.
    pub fn label(self) -> &'static str {
        match self {
            BogoKind::None => "",
            BogoKind::Bogo => "BOGO",
            BogoKind::B2g1 => "B2G1",
        }
    }
}

/// A single promotional item found on the sales page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BogoItem {
    /// Display name of the item
    pub name: String,
    /// Free-text date range as shown on the page
    pub effective_dates: String,
    /// Classified promotion kind, never `BogoKind::None`
    pub kind: BogoKind,
}

const BOGO_COMPARE_TEXT: [&str; 4] = [
    "buy 1 get 1 free",
    "buy one get one free",
    "buy one get 1 free",
    "buy 1 get one free",
];

const B2G1_COMPARE_TEXT: [&str; 4] = [
    "buy 2 get 1 free",
    "buy two get one free",
    "buy 2 get one free",
    "buy two get 1 free",
];

/// Classify a tile's sale text. The buy-one-get-one phrasings are tested
/// first, then the buy-two-get-one phrasings; first match wins.
pub fn bogo_kind(sale_text: &str) -> BogoKind {
    if is_any_in_text(sale_text, &BOGO_COMPARE_TEXT) {
        return BogoKind::Bogo;
    }
    if is_any_in_text(sale_text, &B2G1_COMPARE_TEXT) {
        return BogoKind::B2g1;
    }
    BogoKind::None
}

/// Fetch the sales page and parse it into a document tree.
///
/// Fails on a non-success status or an empty body. Malformed markup is not an
/// error: parsing is lenient and produces a best-effort tree.
pub fn retrieve_sales_webpage(url: &str) -> Result<Html, FetchError> {
    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    let response = client.get(url).send()?;

    let status = response.status();
    let body = response.text()?;

    if !status.is_success() {
        return Err(FetchError::Transport {
            url: url.to_string(),
            status: status.as_u16(),
            body,
        });
    }
    if body.trim().is_empty() {
        return Err(FetchError::EmptyContent {
            url: url.to_string(),
        });
    }

    Ok(Html::parse_document(&body))
}

/// Walk every promo tile on the page and collect the classified sale items,
/// in document order.
///
/// Tiles without a deal node and tiles whose sale text is not a recognized
/// promotion are skipped silently. A tile that classified as a promotion but
/// lacks the expected name or dates markup is skipped with a warning rather
/// than failing the whole page.
pub fn parse_webpage_bogos(document: &Html) -> Vec<BogoItem> {
    let tile_selector = Selector::parse("div.theTileContainer").unwrap();

    let mut bogo_items = Vec::new();
    for tile in document.select(&tile_selector) {
        match parse_tile(tile) {
            Ok(Some(item)) => bogo_items.push(item),
            Ok(None) => {}
            Err(e) => warn!("skipping malformed tile: {}", e),
        }
    }

    bogo_items
}

/// Extract one tile. `Ok(None)` means the tile is not a promotion; an error
/// means the tile claimed to be one but its markup is missing a piece.
fn parse_tile(tile: ElementRef) -> Result<Option<BogoItem>, ExtractionError> {
    let deal_selector = Selector::parse("div.deal").unwrap();
    let sale_text_selector = Selector::parse("span.ellipsis_text").unwrap();
    let title_selector = Selector::parse("div.title h2.ellipsis_text").unwrap();
    let dates_selector = Selector::parse("div.validDates span").unwrap();

    let Some(deal) = tile.select(&deal_selector).next() else {
        return Ok(None);
    };

    let Some(sale_node) = deal.select(&sale_text_selector).next() else {
        return Err(ExtractionError::Shape {
            tile: String::new(),
            selector: "span.ellipsis_text",
        });
    };
    let sale_text = collect_text(sale_node);

    let kind = bogo_kind(&sale_text);
    if kind == BogoKind::None {
        return Ok(None);
    }

    let Some(name_node) = tile.select(&title_selector).next() else {
        return Err(ExtractionError::Shape {
            tile: sale_text,
            selector: "div.title h2.ellipsis_text",
        });
    };
    let Some(dates_node) = tile.select(&dates_selector).next() else {
        return Err(ExtractionError::Shape {
            tile: sale_text,
            selector: "div.validDates span",
        });
    };

    Ok(Some(BogoItem {
        name: collect_text(name_node),
        effective_dates: collect_text(dates_node),
        kind,
    }))
}

fn collect_text(node: ElementRef) -> String {
    node.text().collect::<String>().trim().to_string()
}

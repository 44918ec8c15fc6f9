//! # Label Module
//!
//! Order-ID label layout. The host creates the text object from
//! [`OrderLabel::body`], measures its height, scales it with
//! [`OrderLabel::scale_for`] and extrudes it by [`OrderLabel::extrude_depth`]
//! along +Z before placing it on a face.


use config::constants::{
    DEFAULT_ORDER_ID, FULL_LABEL_HEADER, FULL_LABEL_HEIGHT, LABEL_EXTRUDE_DEPTH,
    SHORT_LABEL_HEIGHT,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{require_positive, SizingError, SizingResult};

/// Text label carrying a customer order ID.
///
/// ## Example
///
/// ```rust
/// use toolbox_sizing::OrderLabel;
///
/// let label = OrderLabel::new("A42-0001", true);
/// assert_eq!(label.body().unwrap(), "KIG.LAND\nKIGURUMI\nA42-0001");
/// assert_eq!(label.scale_for(5.0).unwrap(), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderLabel {
    /// Order ID typed by the user.
    pub order_id: String,
    /// Include the two-line brand header.
    pub full: bool,
}

impl Default for OrderLabel {
    fn default() -> Self {
        Self {
            order_id: DEFAULT_ORDER_ID.to_string(),
            full: false,
        }
    }
}

impl OrderLabel {
    /// Creates a label for an order ID.
    pub fn new(order_id: impl Into<String>, full: bool) -> Self {
        Self {
            order_id: order_id.into(),
            full,
        }
    }

    /// Text content of the label. The order ID is used verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::EmptyOrderId`] for an empty or whitespace-only
    /// order ID.
    pub fn body(&self) -> SizingResult<String> {
        let id = self.order_id.as_str();
        if id.trim().is_empty() {
            return Err(SizingError::EmptyOrderId);
        }
        Ok(if self.full {
            format!("{FULL_LABEL_HEADER}\n{id}")
        } else {
            id.to_string()
        })
    }

    /// Height the rendered text is scaled to.
    #[must_use]
    pub fn target_height(&self) -> f64 {
        if self.full {
            FULL_LABEL_HEIGHT
        } else {
            SHORT_LABEL_HEIGHT
        }
    }

    /// Extrusion depth along +Z.
    #[must_use]
    pub fn extrude_depth(&self) -> f64 {
        LABEL_EXTRUDE_DEPTH
    }

    /// Uniform scale taking rendered text of `text_height` to the target.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::NonPositive`] for a zero, negative or
    /// non-finite text height.
    pub fn scale_for(&self, text_height: f64) -> SizingResult<f64> {
        let height = require_positive("text height", text_height)?;
        let scale = self.target_height() / height;
        debug!(full = self.full, text_height, scale, "order label scale");
        Ok(scale)
    }
}

//! Properties for the purchase-order form dialog.

use yew::prelude::*;

/// Configuration passed by the listing page when it mounts the dialog.
#[derive(Properties, PartialEq, Clone)]
pub struct OrderFormProps {
    /// Identifier of the order to edit. `Some(id)` loads the record on first
    /// render and routes the save through the update endpoint; `None` starts
    /// from a default draft and routes through create. Checked once, on the
    /// first render, and never mutated afterwards.
    #[prop_or_default]
    pub order_id: Option<AttrValue>,

    /// Fired when the user cancels or dismisses the dialog.
    pub on_close: Callback<()>,

    /// Fired exactly once, a fixed delay after a successful save. The caller
    /// is expected to close the dialog and refresh its listing.
    pub on_saved: Callback<()>,
}

//! Validation rules, routing decision, and fixed user-facing wording for the
//! purchase-order form.
//!
//! The check sequence in [`first_validation_error`] is a stable contract:
//! when several fields are invalid, the banner shows the first rule violated
//! in this order, nothing else.

use common::model::purchase_order::PurchaseOrder;

pub const MSG_NUMBER_REQUIRED: &str = "Order number is required.";
pub const MSG_DESCRIPTION_REQUIRED: &str = "Description is required.";
pub const MSG_SUPPLIER_REQUIRED: &str = "Supplier name is required.";
pub const MSG_AMOUNT_REQUIRED: &str = "Amount is required.";
pub const MSG_AMOUNT_NUMERIC: &str = "Amount must be a numeric value.";
pub const MSG_DATE_REQUIRED: &str = "Reference date is required.";
pub const MSG_COST_CENTER_REQUIRED: &str = "Cost center is required.";
pub const MSG_REQUESTER_REQUIRED: &str = "Requester is required.";

pub const MSG_SAVED: &str = "Purchase order saved.";
pub const MSG_NOT_FOUND: &str = "Purchase order not found.";
pub const MSG_SAVE_FALLBACK: &str = "The purchase order could not be saved.";

/// Delay between a successful save and the completion callback, so the
/// success banner is visible before the dialog closes.
pub const SAVED_CLOSE_DELAY_MS: u32 = 1_000;

/// Runs the required-field and type checks in their fixed order and returns
/// the first failing message, or `None` when the draft may be submitted.
pub fn first_validation_error(draft: &PurchaseOrder) -> Option<&'static str> {
    if draft.number.trim().is_empty() {
        return Some(MSG_NUMBER_REQUIRED);
    }
    if draft.description.trim().is_empty() {
        return Some(MSG_DESCRIPTION_REQUIRED);
    }
    if draft.supplier_name.trim().is_empty() {
        return Some(MSG_SUPPLIER_REQUIRED);
    }
    if draft.amount.trim().is_empty() {
        return Some(MSG_AMOUNT_REQUIRED);
    }
    if draft.amount.trim().parse::<f64>().is_err() {
        return Some(MSG_AMOUNT_NUMERIC);
    }
    if draft.reference_date.trim().is_empty() {
        return Some(MSG_DATE_REQUIRED);
    }
    if draft.cost_center.trim().is_empty() {
        return Some(MSG_COST_CENTER_REQUIRED);
    }
    if draft.requester.trim().is_empty() {
        return Some(MSG_REQUESTER_REQUIRED);
    }
    None
}

/// Which persistence operation a submit maps to. Decided by the mount
/// identifier alone, never by draft contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveRoute {
    Create,
    Update(String),
}

impl SaveRoute {
    pub fn for_order(order_id: Option<&str>) -> Self {
        match order_id {
            Some(id) if !id.is_empty() => SaveRoute::Update(id.to_string()),
            _ => SaveRoute::Create,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::purchase_order::{ApprovalState, OrderStatus, PaymentMethod};

    fn valid_draft() -> PurchaseOrder {
        PurchaseOrder {
            id: String::new(),
            number: "1001".into(),
            description: "Laptops".into(),
            supplier_name: "Acme".into(),
            amount: "2500.00".into(),
            status: OrderStatus::Open,
            payment_method: PaymentMethod::Pix,
            approval: ApprovalState::AwaitingApproval,
            reference_date: "2024-05-01".into(),
            cost_center: "IT".into(),
            requester: "Jane".into(),
        }
    }

    #[test]
    fn fully_valid_draft_passes() {
        assert_eq!(first_validation_error(&valid_draft()), None);
    }

    #[test]
    fn each_missing_field_reports_its_own_message() {
        let cases: [(fn(&mut PurchaseOrder), &str); 7] = [
            (|d| d.number.clear(), MSG_NUMBER_REQUIRED),
            (|d| d.description.clear(), MSG_DESCRIPTION_REQUIRED),
            (|d| d.supplier_name.clear(), MSG_SUPPLIER_REQUIRED),
            (|d| d.amount.clear(), MSG_AMOUNT_REQUIRED),
            (|d| d.reference_date.clear(), MSG_DATE_REQUIRED),
            (|d| d.cost_center.clear(), MSG_COST_CENTER_REQUIRED),
            (|d| d.requester.clear(), MSG_REQUESTER_REQUIRED),
        ];
        for (clear, expected) in cases {
            let mut draft = valid_draft();
            clear(&mut draft);
            assert_eq!(first_validation_error(&draft), Some(expected));
        }
    }

    #[test]
    fn first_violated_rule_wins_when_several_fields_are_invalid() {
        let mut draft = valid_draft();
        draft.description.clear();
        draft.requester.clear();
        assert_eq!(
            first_validation_error(&draft),
            Some(MSG_DESCRIPTION_REQUIRED)
        );

        let empty = PurchaseOrder::default();
        assert_eq!(first_validation_error(&empty), Some(MSG_NUMBER_REQUIRED));
    }

    #[test]
    fn non_numeric_amount_fails_after_presence() {
        let mut draft = valid_draft();
        draft.amount = "abc".into();
        assert_eq!(first_validation_error(&draft), Some(MSG_AMOUNT_NUMERIC));

        draft.amount = "  2500.00 ".into();
        assert_eq!(first_validation_error(&draft), None);
    }

    #[test]
    fn save_route_follows_the_mount_identifier() {
        assert_eq!(SaveRoute::for_order(None), SaveRoute::Create);
        assert_eq!(SaveRoute::for_order(Some("")), SaveRoute::Create);
        assert_eq!(
            SaveRoute::for_order(Some("42")),
            SaveRoute::Update("42".into())
        );
    }
}

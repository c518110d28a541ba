//! Component state and pure transitions for the purchase-order form.
//!
//! The form lives in exactly one [`FormPhase`] at a time; the phase enum
//! replaces the loading/saving flag pairs so impossible combinations cannot
//! be represented. Everything here is plain state manipulation with no DOM
//! or network access, which keeps the transition rules unit-testable.

use common::model::purchase_order::{ApprovalState, OrderStatus, PaymentMethod, PurchaseOrder};

use super::helpers::MSG_SAVED;

/// Lifecycle of the form.
///
/// `New` covers both a fresh create dialog and the aftermath of a failed
/// load (the draft stays at defaults). `Editing` is only entered through a
/// successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    New,
    Loading,
    Editing,
    Saving,
}

/// Banner feedback. Cleared by any field edit.
#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    Success(String),
    Error(String),
}

/// Selector for [`OrderFormComponent::apply_field`]; one variant per
/// editable draft field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Number,
    Description,
    SupplierName,
    Amount,
    Status,
    PaymentMethod,
    Approval,
    ReferenceDate,
    CostCenter,
    Requester,
}

pub struct OrderFormComponent {
    /// The editable draft. Replaced wholesale by a successful load.
    pub draft: PurchaseOrder,
    pub phase: FormPhase,
    pub feedback: Option<Feedback>,

    /// Guard so the first-render load runs at most once.
    pub loaded: bool,

    /// Phase to return to when a save settles (`Editing` for loaded records,
    /// `New` otherwise).
    resume_phase: FormPhase,
}

impl OrderFormComponent {
    /// `existing` is whether the dialog was mounted with an identifier; it
    /// decides whether the form opens in `Loading` or `New`.
    pub fn new(existing: bool) -> Self {
        Self {
            draft: PurchaseOrder::default(),
            phase: if existing {
                FormPhase::Loading
            } else {
                FormPhase::New
            },
            feedback: None,
            loaded: false,
            resume_phase: FormPhase::New,
        }
    }

    /// Replaces one draft field. Values for the closed-set fields must be one
    /// of the fixed labels; anything else leaves the field untouched (the
    /// selectors never produce such a value). Any edit acknowledges the
    /// current banner.
    pub fn apply_field(&mut self, field: OrderField, value: String) {
        self.feedback = None;
        match field {
            OrderField::Number => self.draft.number = value,
            OrderField::Description => self.draft.description = value,
            OrderField::SupplierName => self.draft.supplier_name = value,
            OrderField::Amount => self.draft.amount = value,
            OrderField::Status => {
                if let Some(status) = OrderStatus::from_label(&value) {
                    self.draft.status = status;
                }
            }
            OrderField::PaymentMethod => {
                if let Some(method) = PaymentMethod::from_label(&value) {
                    self.draft.payment_method = method;
                }
            }
            OrderField::Approval => {
                if let Some(approval) = ApprovalState::from_label(&value) {
                    self.draft.approval = approval;
                }
            }
            OrderField::ReferenceDate => self.draft.reference_date = value,
            OrderField::CostCenter => self.draft.cost_center = value,
            OrderField::Requester => self.draft.requester = value,
        }
    }

    pub fn load_succeeded(&mut self, order: PurchaseOrder) {
        self.draft = order;
        self.phase = FormPhase::Editing;
        self.resume_phase = FormPhase::Editing;
    }

    /// Failed load: the draft stays at defaults and the message lands in the
    /// banner. The form is usable as a create dialog from here.
    pub fn load_failed(&mut self, message: String) {
        self.phase = FormPhase::New;
        self.resume_phase = FormPhase::New;
        self.feedback = Some(Feedback::Error(message));
    }

    /// Enters `Saving`. Returns `false` without side effects when a save is
    /// already in flight or a load is still pending (single outstanding save
    /// per form).
    pub fn begin_save(&mut self) -> bool {
        match self.phase {
            FormPhase::Saving | FormPhase::Loading => false,
            current => {
                self.resume_phase = current;
                self.phase = FormPhase::Saving;
                self.feedback = None;
                true
            }
        }
    }

    pub fn save_failed(&mut self, message: String) {
        self.phase = self.resume_phase;
        self.feedback = Some(Feedback::Error(message));
    }

    pub fn save_succeeded(&mut self) {
        self.phase = self.resume_phase;
        self.feedback = Some(Feedback::Success(MSG_SAVED.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mounting_with_identifier_starts_loading() {
        assert_eq!(OrderFormComponent::new(true).phase, FormPhase::Loading);
        assert_eq!(OrderFormComponent::new(false).phase, FormPhase::New);
    }

    #[test]
    fn failed_load_keeps_default_draft_and_leaves_loading() {
        let mut form = OrderFormComponent::new(true);
        form.load_failed("Purchase order not found.".into());

        assert_eq!(form.phase, FormPhase::New);
        assert_eq!(form.draft, PurchaseOrder::default());
        assert!(matches!(form.feedback, Some(Feedback::Error(_))));
    }

    #[test]
    fn successful_load_replaces_draft_and_enters_editing() {
        let mut form = OrderFormComponent::new(true);
        let mut order = PurchaseOrder::default();
        order.id = "42".into();
        order.number = "1001".into();
        form.load_succeeded(order.clone());

        assert_eq!(form.phase, FormPhase::Editing);
        assert_eq!(form.draft, order);
    }

    #[test]
    fn field_edit_clears_feedback() {
        let mut form = OrderFormComponent::new(false);
        form.feedback = Some(Feedback::Error("Order number is required.".into()));
        form.apply_field(OrderField::Number, "1001".into());

        assert!(form.feedback.is_none());
        assert_eq!(form.draft.number, "1001");
    }

    #[test]
    fn closed_set_fields_ignore_unknown_labels() {
        let mut form = OrderFormComponent::new(false);
        form.apply_field(OrderField::Status, "In transit".into());
        assert_eq!(form.draft.status, OrderStatus::InTransit);

        form.apply_field(OrderField::Status, "Teleported".into());
        assert_eq!(form.draft.status, OrderStatus::InTransit);
    }

    #[test]
    fn begin_save_refuses_while_a_save_is_in_flight() {
        let mut form = OrderFormComponent::new(false);
        assert!(form.begin_save());
        assert_eq!(form.phase, FormPhase::Saving);
        assert!(!form.begin_save());
    }

    #[test]
    fn save_failure_returns_to_the_pre_save_phase() {
        let mut form = OrderFormComponent::new(true);
        form.load_succeeded(PurchaseOrder::default());
        assert!(form.begin_save());
        form.save_failed("Order number already exists.".into());

        assert_eq!(form.phase, FormPhase::Editing);
        assert_eq!(
            form.feedback,
            Some(Feedback::Error("Order number already exists.".into()))
        );
    }

    #[test]
    fn save_success_leaves_saving_and_shows_the_banner() {
        let mut form = OrderFormComponent::new(false);
        assert!(form.begin_save());
        form.save_succeeded();

        assert_eq!(form.phase, FormPhase::New);
        assert!(matches!(form.feedback, Some(Feedback::Success(_))));
    }
}

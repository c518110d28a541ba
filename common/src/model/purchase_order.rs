use serde::{Deserialize, Serialize};

/// Transport representation of a purchase order ("Ordem de Compra").
///
/// This is the shape exchanged with the persistence API and edited by the
/// frontend form. Every free-form field travels as a string; `amount` carries
/// a decimal string and `reference_date` an ISO date (`YYYY-MM-DD`). The
/// closed-set fields use the enums below, which serialize to their exact
/// wire labels.
///
/// An empty `id` marks a record that has not been persisted yet; the server
/// assigns the identifier on creation and it is never rewritten client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    #[serde(default)]
    pub id: String,
    pub number: String,
    pub description: String,
    pub supplier_name: String,
    pub amount: String,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub approval: ApprovalState,
    pub reference_date: String,
    pub cost_center: String,
    pub requester: String,
}

impl Default for PurchaseOrder {
    fn default() -> Self {
        Self {
            id: String::new(),
            number: String::new(),
            description: String::new(),
            supplier_name: String::new(),
            amount: String::new(),
            status: OrderStatus::default(),
            payment_method: PaymentMethod::default(),
            approval: ApprovalState::default(),
            reference_date: String::new(),
            cost_center: String::new(),
            requester: String::new(),
        }
    }
}

/// Fulfilment status of an order. Wire labels are fixed; selectors must only
/// offer the values listed in [`OrderStatus::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Open,
    #[serde(rename = "Awaiting invoicing")]
    AwaitingInvoicing,
    #[serde(rename = "Awaiting card")]
    AwaitingCard,
    #[serde(rename = "Awaiting finance")]
    AwaitingFinance,
    #[serde(rename = "Awaiting legal")]
    AwaitingLegal,
    #[serde(rename = "In transit")]
    InTransit,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Fixed selector ordering.
    pub const ALL: [OrderStatus; 8] = [
        OrderStatus::Open,
        OrderStatus::AwaitingInvoicing,
        OrderStatus::AwaitingCard,
        OrderStatus::AwaitingFinance,
        OrderStatus::AwaitingLegal,
        OrderStatus::InTransit,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Open => "Open",
            OrderStatus::AwaitingInvoicing => "Awaiting invoicing",
            OrderStatus::AwaitingCard => "Awaiting card",
            OrderStatus::AwaitingFinance => "Awaiting finance",
            OrderStatus::AwaitingLegal => "Awaiting legal",
            OrderStatus::InTransit => "In transit",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.label() == label)
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Open
    }
}

/// How the order will be paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Invoice/Boleto")]
    InvoiceBoleto,
    #[serde(rename = "Credit card")]
    CreditCard,
    #[serde(rename = "Bank transfer")]
    BankTransfer,
    Pix,
    Other,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::InvoiceBoleto,
        PaymentMethod::CreditCard,
        PaymentMethod::BankTransfer,
        PaymentMethod::Pix,
        PaymentMethod::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::InvoiceBoleto => "Invoice/Boleto",
            PaymentMethod::CreditCard => "Credit card",
            PaymentMethod::BankTransfer => "Bank transfer",
            PaymentMethod::Pix => "Pix",
            PaymentMethod::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.label() == label)
    }
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::InvoiceBoleto
    }
}

/// Approval chain position of the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalState {
    Yes,
    No,
    #[serde(rename = "Awaiting CEO")]
    AwaitingCeo,
    #[serde(rename = "Awaiting Head")]
    AwaitingHead,
    #[serde(rename = "Awaiting approval")]
    AwaitingApproval,
}

impl ApprovalState {
    pub const ALL: [ApprovalState; 5] = [
        ApprovalState::Yes,
        ApprovalState::No,
        ApprovalState::AwaitingCeo,
        ApprovalState::AwaitingHead,
        ApprovalState::AwaitingApproval,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ApprovalState::Yes => "Yes",
            ApprovalState::No => "No",
            ApprovalState::AwaitingCeo => "Awaiting CEO",
            ApprovalState::AwaitingHead => "Awaiting Head",
            ApprovalState::AwaitingApproval => "Awaiting approval",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.label() == label)
    }
}

impl Default for ApprovalState {
    fn default() -> Self {
        ApprovalState::AwaitingApproval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_draft_starts_with_documented_defaults() {
        let draft = PurchaseOrder::default();
        assert!(draft.id.is_empty());
        assert_eq!(draft.status, OrderStatus::Open);
        assert_eq!(draft.payment_method, PaymentMethod::InvoiceBoleto);
        assert_eq!(draft.approval, ApprovalState::AwaitingApproval);
    }

    #[test]
    fn wire_shape_uses_camel_case_names_and_exact_labels() {
        let order = PurchaseOrder {
            id: "42".into(),
            number: "1001".into(),
            description: "Laptops".into(),
            supplier_name: "Acme".into(),
            amount: "2500.00".into(),
            status: OrderStatus::AwaitingInvoicing,
            payment_method: PaymentMethod::Pix,
            approval: ApprovalState::AwaitingCeo,
            reference_date: "2024-05-01".into(),
            cost_center: "IT".into(),
            requester: "Jane".into(),
        };

        let value = serde_json::to_value(&order).expect("serializes");
        assert_eq!(value["supplierName"], "Acme");
        assert_eq!(value["paymentMethod"], "Pix");
        assert_eq!(value["referenceDate"], "2024-05-01");
        assert_eq!(value["costCenter"], "IT");
        assert_eq!(value["status"], "Awaiting invoicing");
        assert_eq!(value["approval"], "Awaiting CEO");
    }

    #[test]
    fn deserializes_record_without_id() {
        let order: PurchaseOrder = serde_json::from_str(
            r#"{
                "number": "7",
                "description": "Chairs",
                "supplierName": "Móveis SA",
                "amount": "120.50",
                "status": "In transit",
                "paymentMethod": "Invoice/Boleto",
                "approval": "Awaiting Head",
                "referenceDate": "2024-06-10",
                "costCenter": "Facilities",
                "requester": "Rui"
            }"#,
        )
        .expect("deserializes");
        assert!(order.id.is_empty());
        assert_eq!(order.status, OrderStatus::InTransit);
        assert_eq!(order.approval, ApprovalState::AwaitingHead);
    }

    #[test]
    fn from_label_rejects_values_outside_the_closed_set() {
        assert_eq!(OrderStatus::from_label("open"), None);
        assert_eq!(PaymentMethod::from_label("Cash"), None);
        assert_eq!(ApprovalState::from_label(""), None);
        assert_eq!(
            OrderStatus::from_label("Awaiting legal"),
            Some(OrderStatus::AwaitingLegal)
        );
    }
}

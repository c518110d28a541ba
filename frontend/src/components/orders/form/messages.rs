use common::model::purchase_order::PurchaseOrder;

use super::state::OrderField;

pub enum Msg {
    FieldEdited(OrderField, String),
    LoadSucceeded(PurchaseOrder),
    LoadFailed(String),
    Submit,
    SaveSucceeded,
    SaveFailed(String),
    FireCompletion,
}

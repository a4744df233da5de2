//! Print modes accepted by the document operations.

use serde::{Deserialize, Serialize};

/// Layout of a pickup receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickupReceiptMode {
    #[default]
    Condensed,
    Detailed,
}

/// Label layout and printer format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelMode {
    /// One label on A4, left top.
    OneLabelOnA4LtPdf,
    /// One label on A4, right top.
    OneLabelOnA4RtPdf,
    /// One label on A4, left bottom.
    OneLabelOnA4LbPdf,
    /// One label on A4, right bottom.
    OneLabelOnA4RbPdf,
    #[default]
    OneLabelOnA4Pdf,
    FourLabelsOnA4Pdf,
    FourLabelsOnA4RightPdf,
    #[serde(rename = "roll_160x100_pdf")]
    Roll160x100Pdf,
    #[serde(rename = "roll_160x100_vertical_pdf")]
    Roll160x100VerticalPdf,
    #[serde(rename = "roll_160x100_datamax")]
    Roll160x100Datamax,
    #[serde(rename = "roll_160x100_zebra")]
    Roll160x100Zebra,
    #[serde(rename = "roll_160x100_zebra_epl")]
    Roll160x100ZebraEpl,
}

impl PickupReceiptMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PickupReceiptMode::Condensed => "condensed",
            PickupReceiptMode::Detailed => "detailed",
        }
    }
}

impl LabelMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelMode::OneLabelOnA4LtPdf => "one_label_on_a4_lt_pdf",
            LabelMode::OneLabelOnA4RtPdf => "one_label_on_a4_rt_pdf",
            LabelMode::OneLabelOnA4LbPdf => "one_label_on_a4_lb_pdf",
            LabelMode::OneLabelOnA4RbPdf => "one_label_on_a4_rb_pdf",
            LabelMode::OneLabelOnA4Pdf => "one_label_on_a4_pdf",
            LabelMode::FourLabelsOnA4Pdf => "four_labels_on_a4_pdf",
            LabelMode::FourLabelsOnA4RightPdf => "four_labels_on_a4_right_pdf",
            LabelMode::Roll160x100Pdf => "roll_160x100_pdf",
            LabelMode::Roll160x100VerticalPdf => "roll_160x100_vertical_pdf",
            LabelMode::Roll160x100Datamax => "roll_160x100_datamax",
            LabelMode::Roll160x100Zebra => "roll_160x100_zebra",
            LabelMode::Roll160x100ZebraEpl => "roll_160x100_zebra_epl",
        }
    }
}

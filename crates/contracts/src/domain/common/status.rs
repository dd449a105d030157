//! Order / invoice-request status shared by the `status` table of the backend.
//!
//! Orders and invoice requests reference the same four rows, so both screens
//! resolve labels and badge colors through [`DocumentStatus`].

/// Visual tone of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Warning,
    Error,
    Info,
    Neutral,
}

impl StatusTone {
    /// CSS modifier used by the badge components.
    pub fn variant(&self) -> &'static str {
        match self {
            StatusTone::Success => "success",
            StatusTone::Warning => "warning",
            StatusTone::Error => "error",
            StatusTone::Info => "primary",
            StatusTone::Neutral => "neutral",
        }
    }

    /// Tone by status id, as the admin order table colors rows.
    pub fn for_status_id(id: i64) -> Self {
        match id {
            4 => StatusTone::Success,
            2 => StatusTone::Error,
            3 => StatusTone::Info,
            _ => StatusTone::Warning,
        }
    }

    /// Tone by free-form status name. Matching is by substring, case-insensitive.
    pub fn for_status_name(name: &str) -> Self {
        let name = name.to_lowercase();
        if name.contains("đã thanh toán") || name.contains("hoàn thành") {
            StatusTone::Success
        } else if name.contains("chờ thanh toán") || name.contains("đang xử lý") {
            StatusTone::Warning
        } else if name.contains("từ chối") || name.contains("hủy") {
            StatusTone::Error
        } else {
            StatusTone::Neutral
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentStatus {
    Pending,
    Rejected,
    AwaitingPayment,
    Paid,
}

impl DocumentStatus {
    pub const ALL: [DocumentStatus; 4] = [
        DocumentStatus::Pending,
        DocumentStatus::Rejected,
        DocumentStatus::AwaitingPayment,
        DocumentStatus::Paid,
    ];

    pub fn id(&self) -> i64 {
        match self {
            DocumentStatus::Pending => 1,
            DocumentStatus::Rejected => 2,
            DocumentStatus::AwaitingPayment => 3,
            DocumentStatus::Paid => 4,
        }
    }

    pub fn from_id(id: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    pub fn key(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "pending",
            DocumentStatus::Rejected => "rejected",
            DocumentStatus::AwaitingPayment => "awaiting_payment",
            DocumentStatus::Paid => "paid",
        }
    }

    /// Name stored in the backend.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "Chờ xét duyệt",
            DocumentStatus::Rejected => "Từ chối",
            DocumentStatus::AwaitingPayment => "Chờ thanh toán",
            DocumentStatus::Paid => "Đã thanh toán",
        }
    }

    pub fn label_en(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "Pending review",
            DocumentStatus::Rejected => "Rejected",
            DocumentStatus::AwaitingPayment => "Awaiting payment",
            DocumentStatus::Paid => "Paid",
        }
    }

    /// Accepts the backend label, the English label or the key.
    pub fn from_name(name: &str) -> Option<Self> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        Self::ALL.into_iter().find(|s| {
            s.label().to_lowercase() == needle
                || s.label_en().to_lowercase() == needle
                || s.key() == needle
        })
    }

    pub fn tone(&self) -> StatusTone {
        StatusTone::for_status_id(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_by_id() {
        assert_eq!(StatusTone::for_status_id(4), StatusTone::Success);
        assert_eq!(StatusTone::for_status_id(2), StatusTone::Error);
        assert_eq!(StatusTone::for_status_id(3), StatusTone::Info);
        assert_eq!(StatusTone::for_status_id(1), StatusTone::Warning);
        assert_eq!(StatusTone::for_status_id(99), StatusTone::Warning);
    }

    #[test]
    fn test_tone_by_name() {
        assert_eq!(StatusTone::for_status_name("Đã thanh toán"), StatusTone::Success);
        assert_eq!(StatusTone::for_status_name("Hoàn thành"), StatusTone::Success);
        assert_eq!(StatusTone::for_status_name("CHỜ THANH TOÁN"), StatusTone::Warning);
        assert_eq!(StatusTone::for_status_name("Đã hủy"), StatusTone::Error);
        assert_eq!(StatusTone::for_status_name("Từ chối"), StatusTone::Error);
        assert_eq!(StatusTone::for_status_name("Chờ xét duyệt"), StatusTone::Neutral);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(DocumentStatus::from_name(" chờ thanh toán "), Some(DocumentStatus::AwaitingPayment));
        assert_eq!(DocumentStatus::from_name("Paid"), Some(DocumentStatus::Paid));
        assert_eq!(DocumentStatus::from_name("rejected"), Some(DocumentStatus::Rejected));
        assert_eq!(DocumentStatus::from_name(""), None);
        assert_eq!(DocumentStatus::from_name("shipped"), None);
    }

    #[test]
    fn test_ids_round_trip() {
        for status in DocumentStatus::ALL {
            assert_eq!(DocumentStatus::from_id(status.id()), Some(status));
        }
        assert_eq!(DocumentStatus::from_id(0), None);
    }
}

use serde::{Deserialize, Serialize};

/// Body of `POST /api/vnpay/create-order`. `amount` is in whole VND.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    pub amount: i64,
    pub order_id: i64,
    #[serde(default)]
    pub bank_code: String,
}

impl CreatePaymentRequest {
    pub fn for_order(order_id: i64, total: f64) -> Self {
        Self {
            amount: total.round() as i64,
            order_id,
            bank_code: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentResponse {
    #[serde(default)]
    pub payment_url: Option<String>,
}

/// Query parameters VNPay appends to the return URL.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VnpayReturn {
    #[serde(rename = "vnp_ResponseCode", default)]
    pub response_code: Option<String>,
    #[serde(rename = "vnp_TxnRef", default)]
    pub txn_ref: Option<String>,
}

pub const VNPAY_SUCCESS_CODE: &str = "00";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// The customer left the gateway without paying; no parameters were passed back.
    Cancelled,
    Succeeded { order_id: i64 },
    Failed { code: String },
}

impl VnpayReturn {
    /// Order id is the part of `vnp_TxnRef` before the first `_`.
    pub fn order_id(&self) -> Option<i64> {
        let txn_ref = self.txn_ref.as_deref()?;
        let head = txn_ref.split('_').next()?;
        head.trim().parse().ok()
    }

    pub fn outcome(&self) -> PaymentOutcome {
        let code = self.response_code.as_deref().filter(|c| !c.is_empty());
        let txn_ref = self.txn_ref.as_deref().filter(|t| !t.is_empty());
        if code.is_none() && txn_ref.is_none() {
            return PaymentOutcome::Cancelled;
        }
        match (code, self.order_id()) {
            (Some(VNPAY_SUCCESS_CODE), Some(order_id)) => PaymentOutcome::Succeeded { order_id },
            (code, _) => PaymentOutcome::Failed {
                code: code.unwrap_or_default().to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ret(code: Option<&str>, txn: Option<&str>) -> VnpayReturn {
        VnpayReturn {
            response_code: code.map(String::from),
            txn_ref: txn.map(String::from),
        }
    }

    #[test]
    fn test_order_id_from_txn_ref() {
        assert_eq!(ret(None, Some("42_1717171717")).order_id(), Some(42));
        assert_eq!(ret(None, Some("42")).order_id(), Some(42));
        assert_eq!(ret(None, Some("abc_1")).order_id(), None);
        assert_eq!(ret(None, None).order_id(), None);
    }

    #[test]
    fn test_outcomes() {
        assert_eq!(ret(None, None).outcome(), PaymentOutcome::Cancelled);
        assert_eq!(ret(Some(""), Some("")).outcome(), PaymentOutcome::Cancelled);
        assert_eq!(
            ret(Some("00"), Some("15_999")).outcome(),
            PaymentOutcome::Succeeded { order_id: 15 }
        );
        assert_eq!(
            ret(Some("24"), Some("15_999")).outcome(),
            PaymentOutcome::Failed { code: "24".into() }
        );
        assert_eq!(
            ret(Some("00"), None).outcome(),
            PaymentOutcome::Failed { code: "00".into() }
        );
    }

    #[test]
    fn test_amount_is_rounded() {
        let req = CreatePaymentRequest::for_order(3, 150000.6);
        assert_eq!(req.amount, 150001);
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"amount":150001,"orderId":3,"bankCode":""}"#
        );
    }
}

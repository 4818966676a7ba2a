/*!
# Order Metadata

The free-form blob stored with every order: a snapshot of the rented
machine plus what the buyer intends to run on it. Field names match what
the marketplace indexer reads back, so they are not snake_case.
*/

use crate::{MachineUuid, SdkError, SdkResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderMetadata {
    #[serde(rename = "formData")]
    pub form_data: OrderFormData,

    #[serde(rename = "MachineInfo")]
    pub machine_info: MachineInfo,

    #[serde(rename = "OrderInfo")]
    pub order_info: OrderInfo,
}

impl OrderMetadata {
    pub fn to_json(&self) -> SdkResult<String> {
        serde_json::to_string(self).map_err(|e| SdkError::Encoding(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFormData {
    pub duration: u64,
    pub task_name: String,
}

/// Snapshot of the machine at the time the order was placed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MachineInfo {
    pub uuid: MachineUuid,
    pub provider: String,
    pub region: String,
    #[serde(rename = "GPU")]
    pub gpu: String,
    #[serde(rename = "CPU")]
    pub cpu: String,
    pub tflops: f64,
    #[serde(rename = "RAM")]
    pub ram: String,
    pub avail_disk_storage: u64,
    pub reliability: String,
    #[serde(rename = "CPS")]
    pub cps: String,
    pub speed: String,
    pub max_duration: u64,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(rename = "IP")]
    pub ip: String,
    pub port: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderIntent {
    #[default]
    Train,
    Deploy,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderInfo {
    /// Id of the model in the marketplace's model catalogue.
    pub model: u64,
    #[serde(default)]
    pub intent: OrderIntent,
    #[serde(rename = "DownloadURL", default)]
    pub download_url: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OrderMetadata {
        OrderMetadata {
            form_data: OrderFormData {
                duration: 3,
                task_name: "Computing Task-1".to_string(),
            },
            machine_info: MachineInfo {
                uuid: MachineUuid::new([0xab; 16]),
                provider: "distri".to_string(),
                gpu: "RTX 4090".to_string(),
                max_duration: 24,
                price: Decimal::new(15, 1),
                ..Default::default()
            },
            order_info: OrderInfo {
                model: 7,
                intent: OrderIntent::Deploy,
                download_url: vec!["https://example.com/deploy.py".to_string()],
            },
        }
    }

    #[test]
    fn test_metadata_field_names() {
        let json: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();

        assert_eq!(json["formData"]["taskName"], "Computing Task-1");
        assert_eq!(json["MachineInfo"]["GPU"], "RTX 4090");
        assert_eq!(json["MachineInfo"]["Uuid"], "abababababababababababababababab");
        assert_eq!(json["MachineInfo"]["MaxDuration"], 24);
        assert_eq!(json["OrderInfo"]["Intent"], "deploy");
        assert_eq!(json["OrderInfo"]["Model"], 7);
        assert_eq!(
            json["OrderInfo"]["DownloadURL"][0],
            "https://example.com/deploy.py"
        );
    }

    #[test]
    fn test_price_is_a_json_number() {
        let json: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        assert_eq!(json["MachineInfo"]["Price"], serde_json::json!(1.5));

        let machine: MachineInfo = serde_json::from_value(json["MachineInfo"].clone()).unwrap();
        assert_eq!(machine.price, Decimal::new(15, 1));
    }

    #[test]
    fn test_intent_defaults_to_train() {
        let info: OrderInfo = serde_json::from_str(r#"{"Model":3}"#).unwrap();
        assert_eq!(info.intent, OrderIntent::Train);
        assert!(info.download_url.is_empty());
    }
}

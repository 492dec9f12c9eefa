//! Common test utilities and helpers
#![allow(dead_code)]

use pulseboard::CustomerRecord;

/// Builder for customer fixtures
pub struct CustomerBuilder {
    record: CustomerRecord,
}

impl CustomerBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            record: CustomerRecord::new(id),
        }
    }

    pub fn spent(mut self, amount: f64) -> Self {
        self.record.total_spent = Some(amount);
        self
    }

    pub fn churn(mut self, score: f64) -> Self {
        self.record.churn_risk_score = Some(score);
        self
    }

    pub fn orders(mut self, orders: f64) -> Self {
        self.record.total_orders = Some(orders);
        self
    }

    pub fn days_since_purchase(mut self, days: f64) -> Self {
        self.record.days_since_last_purchase = Some(days);
        self
    }

    pub fn clv(mut self, value: f64) -> Self {
        self.record.lifetime_value_predicted = Some(value);
        self
    }

    pub fn electronics(mut self, affinity: f64) -> Self {
        self.record.electronics_affinity = Some(affinity);
        self
    }

    pub fn traffic_source(mut self, source: &str) -> Self {
        self.record.primary_traffic_source = Some(source.to_string());
        self
    }

    pub fn device(mut self, device: &str) -> Self {
        self.record.primary_device = Some(device.to_string());
        self
    }

    pub fn city(mut self, city: &str) -> Self {
        self.record.city = Some(city.to_string());
        self
    }

    pub fn campaign(mut self, campaign: &str) -> Self {
        self.record.recommended_campaign = Some(campaign.to_string());
        self
    }

    pub fn channel_rates(mut self, whatsapp: f64, email: f64) -> Self {
        self.record.whatsapp_response_rate = Some(whatsapp);
        self.record.email_open_rate = Some(email);
        self
    }

    pub fn build(self) -> CustomerRecord {
        self.record
    }
}

/// A small table with every column family populated
pub fn sample_customers() -> Vec<CustomerRecord> {
    vec![
        CustomerBuilder::new("C001")
            .spent(2400.0)
            .churn(0.1)
            .orders(12.0)
            .days_since_purchase(5.0)
            .electronics(0.9)
            .traffic_source("Organic")
            .device("Mobile")
            .city("Mumbai")
            .campaign("Diwali Sale")
            .channel_rates(82.0, 0.45)
            .build(),
        CustomerBuilder::new("C002")
            .spent(650.0)
            .churn(0.25)
            .orders(4.0)
            .days_since_purchase(40.0)
            .electronics(0.4)
            .traffic_source("Paid")
            .device("Desktop")
            .city("Delhi")
            .channel_rates(61.0, 0.3)
            .build(),
        CustomerBuilder::new("C003")
            .spent(120.0)
            .churn(0.7)
            .orders(1.0)
            .days_since_purchase(150.0)
            .traffic_source("Organic")
            .device("Mobile")
            .city("Mumbai")
            .campaign("Diwali Sale")
            .build(),
        CustomerBuilder::new("C004").churn(0.95).build(),
    ]
}

/// JSON rows as the REST table returns them, with loose typing
pub fn sample_rows_json() -> serde_json::Value {
    serde_json::json!([
        {
            "customer_id": "C001",
            "total_spent": "2400",
            "total_orders": 12,
            "churn_risk_score": 0.1,
            "primary_traffic_source": "Organic"
        },
        {
            "customer_id": 2,
            "total_spent": null,
            "churn_risk_score": "0.9"
        },
        {
            "total_spent": 10
        }
    ])
}

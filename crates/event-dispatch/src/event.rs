use chrono::{DateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};

/// Trait for typed domain event records.
///
/// Domain events represent facts that have happened in the domain.
/// They are immutable and should be named in past tense.
pub trait DomainEvent: Serialize {
    /// Returns the event type name handlers are registered under.
    fn event_type(&self) -> &'static str;
}

/// Something that happened, as delivered to event handlers.
///
/// The payload is an opaque JSON value whose shape is determined by the
/// event type. Handlers read it back through [`Event::payload_as`].
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    event_type: String,
    occurred_at: DateTime<Utc>,
    payload: serde_json::Value,
}

impl Event {
    /// Creates an event with a raw payload, stamped with the current time.
    pub fn new(event_type: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            event_type: event_type.into(),
            occurred_at: Utc::now(),
            payload,
        }
    }

    /// Creates an event from a typed domain event record.
    pub fn from_domain<E: DomainEvent>(event: &E) -> Result<Self, serde_json::Error> {
        Ok(Self::new(event.event_type(), serde_json::to_value(event)?))
    }

    /// Returns the event type name.
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// Returns when the event was created.
    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    /// Returns the raw payload.
    pub fn payload(&self) -> &serde_json::Value {
        &self.payload
    }

    /// Deserializes the payload into the record type a handler expects.
    pub fn payload_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.payload.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Renamed {
        id: String,
        name: String,
    }

    impl DomainEvent for Renamed {
        fn event_type(&self) -> &'static str {
            "Renamed"
        }
    }

    #[test]
    fn new_event_is_stamped_with_current_time() {
        let before = Utc::now();
        let event = Event::new("Something", serde_json::json!({}));
        let after = Utc::now();

        assert_eq!(event.event_type(), "Something");
        assert!(event.occurred_at() >= before && event.occurred_at() <= after);
        assert_eq!(event.payload(), &serde_json::json!({}));
    }

    #[test]
    fn from_domain_uses_declared_event_type() {
        let record = Renamed {
            id: "1".to_string(),
            name: "John".to_string(),
        };
        let event = Event::from_domain(&record).unwrap();

        assert_eq!(event.event_type(), "Renamed");
        assert_eq!(event.payload()["name"], "John");
        assert_eq!(event.payload_as::<Renamed>().unwrap(), record);
    }

    #[test]
    fn payload_as_rejects_mismatched_shape() {
        let event = Event::new("Renamed", serde_json::json!({ "id": "1" }));
        assert!(event.payload_as::<Renamed>().is_err());
    }

    #[test]
    fn clones_keep_the_original_timestamp() {
        let event = Event::new("Something", serde_json::json!({ "a": 1 }));
        let copy = event.clone();
        assert_eq!(copy.occurred_at(), event.occurred_at());
        assert_eq!(copy, event);
    }
}

use poll_promise::Promise;
use serde::de::DeserializeOwned;

use crate::api::PlatformData;
use crate::Result;

/// A list fetched in the background for one screen.
pub enum Loadable<T> {
    Idle,
    Loading(Promise<Result<PlatformData>>),
    Ready { records: Vec<T>, sample: bool },
    Failed(String),
}

impl<T: DeserializeOwned> Loadable<T> {
    /// Move a finished fetch into `Ready` or `Failed`. Returns true on the frame it finishes.
    pub fn poll(&mut self) -> bool {
        let next = match self {
            Self::Loading(promise) => match promise.ready() {
                Some(Ok(data)) => match data.records::<T>() {
                    Ok(records) => Self::Ready {
                        records,
                        sample: data.is_mock(),
                    },
                    Err(e) => Self::Failed(format!("Unexpected response: {}", e)),
                },
                Some(Err(e)) => Self::Failed(e.to_string()),
                None => return false,
            },
            _ => return false,
        };

        *self = next;
        true
    }
}

impl<T> Loadable<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }

    pub fn is_sample(&self) -> bool {
        matches!(self, Self::Ready { sample: true, .. })
    }

    pub fn records(&self) -> &[T] {
        match self {
            Self::Ready { records, .. } => records,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FriendRecord;
    use serde_json::json;

    #[test]
    fn test_poll_ready_sample() {
        let data = PlatformData::Mock {
            payload: json!([{ "id": "f1", "displayName": "Kim", "profileImageUrl": null }]),
            cause: "offline".to_string(),
        };
        let mut load: Loadable<FriendRecord> = Loadable::Loading(Promise::from_ready(Ok(data)));

        assert!(load.poll());
        assert!(load.is_sample());
        assert_eq!(load.records()[0].display_name, "Kim");
        assert!(!load.poll());
    }

    #[test]
    fn test_poll_bad_shape_fails() {
        let data = PlatformData::Real(json!({ "items": [{ "id": 7 }] }));
        let mut load: Loadable<FriendRecord> = Loadable::Loading(Promise::from_ready(Ok(data)));

        assert!(load.poll());
        assert!(load.error().is_some());
        assert!(load.records().is_empty());
    }
}

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamePlayRecord {
    pub game_id: String,
    pub name: String,
    pub play_time: String,
    /// RFC 3339 timestamp.
    pub last_played: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub unlocked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendRecord {
    pub id: String,
    pub display_name: String,
    pub profile_image_url: Option<String>,
}

// Sample payloads served when a known endpoint cannot be reached.

pub(crate) fn sample_played_games() -> Vec<GamePlayRecord> {
    let now = Utc::now();
    vec![
        GamePlayRecord {
            game_id: "game1".to_string(),
            name: "Candy Crush Saga".to_string(),
            play_time: "2h 30m".to_string(),
            last_played: (now - Duration::days(1)).to_rfc3339(),
        },
        GamePlayRecord {
            game_id: "game2".to_string(),
            name: "Clash of Clans".to_string(),
            play_time: "5h 15m".to_string(),
            last_played: (now - Duration::days(3)).to_rfc3339(),
        },
    ]
}

pub(crate) fn sample_achievements() -> Vec<AchievementRecord> {
    vec![AchievementRecord {
        id: "achievement1".to_string(),
        name: "First Victory".to_string(),
        description: "Win your first game".to_string(),
        unlocked: true,
    }]
}

pub(crate) fn sample_friends() -> Vec<FriendRecord> {
    vec![FriendRecord {
        id: "friend1".to_string(),
        display_name: "GamerFriend123".to_string(),
        profile_image_url: None,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_game_play_record_field_names() {
        let value = serde_json::to_value(&sample_played_games()[0]).unwrap();
        assert!(value.get("gameId").is_some());
        assert!(value.get("playTime").is_some());
        assert!(value.get("lastPlayed").is_some());
    }

    #[test]
    fn test_sample_timestamps_are_in_the_past() {
        let now = Utc::now();
        for record in sample_played_games() {
            let played = DateTime::parse_from_rfc3339(&record.last_played).unwrap();
            assert!(played < now);
        }
    }

    #[test]
    fn test_friend_without_image_serializes_null() {
        let value = serde_json::to_value(&sample_friends()[0]).unwrap();
        assert_eq!(value["displayName"], "GamerFriend123");
        assert!(value["profileImageUrl"].is_null());
    }
}

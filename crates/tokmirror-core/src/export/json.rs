//! JSON export layout: the combined `user_data_tiktok.json` shape.
//!
//! Only the sections this tool consumes are modeled; everything else in
//! the export is ignored. Missing sections deserialize to empty lists.

use serde::Deserialize;

/// Top-level combined export object
#[derive(Debug, Default, Deserialize)]
pub struct UserData {
    #[serde(rename = "Watch History", default)]
    pub watch_history: WatchHistory,
    #[serde(rename = "Likes and Favorites", default)]
    pub likes_and_favorites: LikesAndFavorites,
    #[serde(rename = "Your Activity", default)]
    pub your_activity: YourActivity,
}

#[derive(Debug, Default, Deserialize)]
pub struct WatchHistory {
    #[serde(rename = "VideoList", default)]
    pub video_list: Vec<VideoRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoRecord {
    #[serde(rename = "Link", default)]
    pub link: String,
    #[serde(rename = "Date", default)]
    pub date: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct LikesAndFavorites {
    #[serde(rename = "Like List", default)]
    pub like_list: Vec<LikeRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LikeRecord {
    #[serde(rename = "Link", default)]
    pub link: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct YourActivity {
    #[serde(rename = "Searches", default)]
    pub searches: Searches,
}

#[derive(Debug, Default, Deserialize)]
pub struct Searches {
    #[serde(rename = "SearchList", default)]
    pub search_list: Vec<SearchRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchRecord {
    #[serde(rename = "SearchTerm", default)]
    pub search_term: String,
}

/// Parse a combined JSON export member
pub fn parse(text: &str) -> crate::Result<UserData> {
    let data: UserData = serde_json::from_str(text)?;
    tracing::debug!(
        "Parsed JSON export: {} watch, {} like, {} search records",
        data.watch_history.video_list.len(),
        data.likes_and_favorites.like_list.len(),
        data.your_activity.searches.search_list.len()
    );
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_shape() {
        let json = r#"{
            "Watch History": {
                "VideoList": [
                    {"Link": "https://www.tiktok.com/video/1", "Date": "2024-01-05 09:15:00"}
                ]
            },
            "Likes and Favorites": {
                "Like List": [
                    {"Link": "https://www.tiktok.com/video/2"}
                ]
            },
            "Your Activity": {
                "Searches": {
                    "SearchList": [
                        {"SearchTerm": "cats"}
                    ]
                }
            }
        }"#;

        let data = parse(json).unwrap();
        assert_eq!(data.watch_history.video_list.len(), 1);
        assert_eq!(data.watch_history.video_list[0].date, "2024-01-05 09:15:00");
        assert_eq!(data.likes_and_favorites.like_list.len(), 1);
        assert_eq!(
            data.your_activity.searches.search_list[0].search_term,
            "cats"
        );
    }

    #[test]
    fn test_missing_sections_yield_empty_lists() {
        let data = parse(r#"{"Profile": {"Name": "someone"}}"#).unwrap();
        assert!(data.watch_history.video_list.is_empty());
        assert!(data.likes_and_favorites.like_list.is_empty());
        assert!(data.your_activity.searches.search_list.is_empty());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(parse("Date: 2024-01-01 00:00:00").is_err());
        assert!(parse("{not json").is_err());
    }
}

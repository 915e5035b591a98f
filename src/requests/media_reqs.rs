use anyhow::Error;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct MediaItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Deserialize, Debug)]
pub struct UserMediaResponse {
    pub media: Vec<MediaItem>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewMedia {
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub url: String,
    pub title: String,
    pub caption: String,
    pub tags: Vec<String>,
}

fn media_url(server_name: &str, media_id: &str) -> String {
    format!(
        "{}/api/media/{}",
        server_name.trim_end_matches('/'),
        urlencoding::encode(media_id)
    )
}

fn require_api_key(api_key: &Option<String>) -> Result<&str, Error> {
    api_key
        .as_deref()
        .ok_or_else(|| Error::msg("API key is missing"))
}

pub async fn call_get_user_media(
    server_name: &str,
    api_key: &Option<String>,
) -> Result<Vec<MediaItem>, Error> {
    let url = format!("{}/api/media/user", server_name.trim_end_matches('/'));
    let api_key_ref = require_api_key(api_key)?;

    let response = Request::get(&url)
        .header("Api-Key", api_key_ref)
        .header("Content-Type", "application/json")
        .send()
        .await?;
    if !response.ok() {
        return Err(Error::msg(format!(
            "Failed to get media: {}",
            response.status_text()
        )));
    }

    let response_text = response.text().await?;
    let body: UserMediaResponse = serde_json::from_str(&response_text)
        .map_err(|e| Error::msg(format!("Failed to deserialize media list: {}", e)))?;
    Ok(body.media)
}

pub async fn call_get_media(
    server_name: &str,
    api_key: &Option<String>,
    media_id: &str,
) -> Result<Option<MediaItem>, Error> {
    let api_key_ref = require_api_key(api_key)?;

    let response = Request::get(&media_url(server_name, media_id))
        .header("Api-Key", api_key_ref)
        .header("Content-Type", "application/json")
        .send()
        .await?;
    if response.status() == 404 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(Error::msg(format!(
            "Failed to get media item: {}",
            response.status_text()
        )));
    }
    Ok(Some(response.json::<MediaItem>().await?))
}

pub async fn call_delete_media(
    server_name: &str,
    api_key: &Option<String>,
    media_id: &str,
) -> Result<(), Error> {
    let api_key_ref = require_api_key(api_key)?;

    let response = Request::delete(&media_url(server_name, media_id))
        .header("Api-Key", api_key_ref)
        .header("Content-Type", "application/json")
        .send()
        .await?;
    if !response.ok() {
        return Err(Error::msg(format!(
            "Failed to delete media: {}",
            response.status_text()
        )));
    }
    Ok(())
}

pub async fn call_upload_media(
    server_name: &str,
    api_key: &Option<String>,
    media: &NewMedia,
) -> Result<MediaItem, Error> {
    let url = format!("{}/api/media", server_name.trim_end_matches('/'));
    let api_key_ref = require_api_key(api_key)?;

    let response = Request::post(&url)
        .header("Api-Key", api_key_ref)
        .header("Content-Type", "application/json")
        .json(media)?
        .send()
        .await?;
    if !response.ok() {
        return Err(Error::msg(format!(
            "Failed to upload media: {}",
            response.status_text()
        )));
    }
    Ok(response.json::<MediaItem>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_item_reads_wire_names() {
        let raw = r#"{
            "_id": "abc123",
            "type": "video",
            "url": "https://cdn.example.com/v.mp4",
            "title": "Surf",
            "caption": "Morning set"
        }"#;
        let item: MediaItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.id, "abc123");
        assert_eq!(item.media_type, MediaType::Video);
        assert!(item.tags.is_empty());
    }

    #[test]
    fn unknown_media_type_is_rejected() {
        let raw = r#"{"_id": "1", "type": "audio", "url": "x"}"#;
        assert!(serde_json::from_str::<MediaItem>(raw).is_err());
    }

    #[test]
    fn media_url_escapes_id_and_trailing_slash() {
        assert_eq!(
            media_url("https://api.example.com/", "a b"),
            "https://api.example.com/api/media/a%20b"
        );
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let err = require_api_key(&None).unwrap_err();
        assert_eq!(err.to_string(), "API key is missing");
    }
}

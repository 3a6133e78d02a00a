use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use imagine3d::{ImagineClient, ImagineError};
use std::fs::File;
use std::io::Write;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn encodes_fetched_bytes_with_declared_media_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tree.png"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(b"not a real png".to_vec(), "image/png"))
        .mount(&server)
        .await;

    let client = ImagineClient::new_with_url("test_api_key".to_string(), &server.uri()).unwrap();
    let image = client
        .encode_image(&format!("{}/tree.png", server.uri()))
        .await
        .unwrap();

    assert_eq!(image.media_type, "image/png");
    assert_eq!(image.data, BASE64_STANDARD.encode(b"not a real png"));
}

#[tokio::test]
async fn undeclared_content_type_falls_back_to_jpeg() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/mystery"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"mystery bytes".to_vec()))
        .mount(&server)
        .await;

    let client = ImagineClient::new_with_url("test_api_key".to_string(), &server.uri()).unwrap();
    let image = client
        .encode_image(&format!("{}/mystery", server.uri()))
        .await
        .unwrap();

    assert_eq!(image.media_type, "image/jpeg");
}

#[tokio::test]
async fn encodes_local_file_with_guessed_media_type() {
    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("test_image.png");
    let mut file = File::create(&file_path).unwrap();
    file.write_all(b"dummy image data").unwrap();

    let client = ImagineClient::new_with_url("test_api_key".to_string(), "http://localhost/").unwrap();
    let image = client.encode_image_file(&file_path).await.unwrap();

    assert_eq!(image.media_type, "image/png");
    assert_eq!(image.data, BASE64_STANDARD.encode(b"dummy image data"));
}

#[tokio::test]
async fn unknown_extension_falls_back_to_jpeg() {
    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("image.raw3d");
    let mut file = File::create(&file_path).unwrap();
    file.write_all(b"bytes").unwrap();

    let client = ImagineClient::new_with_url("test_api_key".to_string(), "http://localhost/").unwrap();
    let image = client.encode_image_file(&file_path).await.unwrap();

    assert_eq!(image.media_type, "image/jpeg");
}

#[tokio::test]
async fn missing_image_file_is_reported_before_any_request() {
    let client = ImagineClient::new_with_url("test_api_key".to_string(), "http://localhost/").unwrap();
    let err = client
        .generate_scene_with_image("a gear", "/definitely/not/here.png")
        .await
        .unwrap_err();

    assert!(matches!(err, ImagineError::IoError(_)));
}

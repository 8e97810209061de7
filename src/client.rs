use std::fmt::Display;

use log::{debug, error};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::models::{BookRideRequest, Booking, CancelBookingRequest, PublishRideRequest, RegisterRequest, Ride};
use crate::normalizer::{self, Payload};

/// One method per backend endpoint. No retries and no caching: every call is
/// a single request whose outcome goes straight back to the caller.
#[derive(Clone)]
pub struct RideShareClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl RideShareClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain"));

        let http = reqwest::Client::builder().default_headers(headers).build()?;
        Ok(Self::with_http_client(http, config))
    }

    pub fn with_http_client(http: reqwest::Client, config: ClientConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.url(path);
        debug!("{} {}", method, url);
        self.http.request(method, url)
    }

    async fn send(&self, builder: RequestBuilder) -> ClientResult<Payload> {
        let response = builder.send().await.map_err(|e| {
            error!("Request failed to reach the backend: {}", e);
            ClientError::Network(e)
        })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await.map_err(|e| {
            error!("Failed to read response body: {}", e);
            ClientError::Network(e)
        })?;

        debug!("Response status: {}, content-type: {:?}", status, content_type);
        debug!("Response body: {}", body);

        normalizer::decode(status, content_type.as_deref(), &body).map_err(|e| {
            error!("Backend rejected request: {}", e);
            e
        })
    }

    async fn send_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<Payload> {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    // Users

    pub async fn login(&self, user_id: impl Display) -> ClientResult<bool> {
        let builder = self
            .request(Method::GET, "/users/login")
            .query(&[("userId", user_id.to_string())]);
        Ok(self.send(builder).await?.into_flag())
    }

    pub async fn register(&self, user: &RegisterRequest) -> ClientResult<String> {
        debug!("Registering {} <{}>", user.name, user.email);
        Ok(self.send_json("/users/register", user).await?.into_identifier())
    }

    // Rides

    pub async fn publish_ride(&self, ride: &PublishRideRequest) -> ClientResult<String> {
        Ok(self.send_json("/rides/publish", ride).await?.into_text())
    }

    pub async fn search_rides(&self, source: &str, destination: &str) -> ClientResult<Vec<Ride>> {
        let builder = self
            .request(Method::GET, "/rides/search")
            .query(&[("source", source), ("destination", destination)]);
        self.send(builder).await?.into_list()
    }

    pub async fn get_all_rides(&self) -> ClientResult<Vec<Ride>> {
        self.send(self.request(Method::GET, "/rides/all")).await?.into_list()
    }

    pub async fn get_my_rides(&self, user_id: impl Display) -> ClientResult<Vec<Ride>> {
        let builder = self
            .request(Method::GET, "/rides/my")
            .query(&[("userId", user_id.to_string())]);
        self.send(builder).await?.into_list()
    }

    pub async fn cancel_ride(&self, ride_id: impl Display) -> ClientResult<String> {
        let builder = self
            .request(Method::POST, "/rides/cancel")
            .query(&[("rideId", ride_id.to_string())]);
        Ok(self.send(builder).await?.into_text())
    }

    // Bookings

    pub async fn book_ride(&self, booking: &BookRideRequest) -> ClientResult<String> {
        Ok(self.send_json("/bookings/book", booking).await?.into_text())
    }

    pub async fn get_my_bookings(&self, user_id: impl Display) -> ClientResult<Vec<Booking>> {
        let builder = self
            .request(Method::GET, "/bookings/my")
            .query(&[("userId", user_id.to_string())]);
        self.send(builder).await?.into_list()
    }

    pub async fn cancel_booking(&self, booking: &CancelBookingRequest) -> ClientResult<String> {
        Ok(self.send_json("/bookings/cancel", booking).await?.into_text())
    }
}

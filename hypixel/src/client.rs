//! Requests against the API.
//!
//! The client does not speak HTTP itself. It builds [`Request`]s and hands
//! them to a [`Transport`], which returns the status and body. Any blocking
//! HTTP library can sit behind the trait, and tests can answer from fixtures.

use std::collections::HashMap;

use log::debug;
use serde_json::{Map, Value};

use crate::{
    skyblock::{AuctionHouse, Product, Profile},
    Config, Error, Player, Result, StatsRegistry,
};

pub const BASE_URL: &str = "https://api.hypixel.net";

/// Header the API key is sent in.
pub const KEY_HEADER: &str = "API-Key";

pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// A GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

/// Carries requests to the API. Should return any response the server gave,
/// whatever its status; the client reads failures out of the body.
pub trait Transport {
    fn get(&self, request: &Request) -> std::result::Result<Response, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, request: &Request) -> std::result::Result<Response, TransportError> {
        (**self).get(request)
    }
}

/// Client for the API.
///
/// ```no_run
/// # use hypixel::{Client, Request, Response, Transport};
/// # struct Http;
/// # impl Transport for Http {
/// #     fn get(&self, _: &Request) -> Result<Response, hypixel::client::TransportError> {
/// #         unimplemented!()
/// #     }
/// # }
/// let client = Client::new("my-key", Http);
/// if let Some(player) = client.get_player("069a79f444e94726a5befca90e38aaf5")? {
///     println!("{} has rank {:?}", player.display_name, player.rank);
/// }
/// # Ok::<(), hypixel::Error>(())
/// ```
pub struct Client<T> {
    key: String,
    config: Config,
    transport: T,
    registry: StatsRegistry,
}

impl<T: Transport> Client<T> {
    pub fn new(key: impl Into<String>, transport: T) -> Self {
        Self::with_config(key, Config::default(), transport)
    }

    /// A client using `config`, decoding stats with the standard registry.
    pub fn with_config(key: impl Into<String>, config: Config, transport: T) -> Self {
        let registry = StatsRegistry::standard().unknown_games(config.unknown_games);
        Self {
            key: key.into(),
            config,
            transport,
            registry,
        }
    }

    /// Replace the stats registry, for example with one holding decoders for
    /// more games. The registry takes the client's `unknown_games` policy.
    pub fn with_registry(mut self, registry: StatsRegistry) -> Self {
        self.registry = registry.unknown_games(self.config.unknown_games);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &StatsRegistry {
        &self.registry
    }

    /// General data and stats of a player. `None` if the player has never
    /// joined.
    pub fn get_player(&self, uuid: &str) -> Result<Option<Player>> {
        let mut body = self.request("/player", &[("uuid", uuid)], true)?;
        match take_field(&mut body, "player")? {
            Value::Null => Ok(None),
            player => Player::from_json(player, &self.registry).map(Some),
        }
    }

    /// One Skyblock profile by its id. `None` if there is no such profile.
    pub fn get_skyblock_profile(&self, profile_id: &str) -> Result<Option<Profile>> {
        let mut body = self.request("/skyblock/profile", &[("profile", profile_id)], true)?;
        Ok(serde_json::from_value(take_field(&mut body, "profile")?)?)
    }

    /// Every Skyblock profile a player is a member of.
    pub fn get_skyblock_profiles(&self, uuid: &str) -> Result<Vec<Profile>> {
        let mut body = self.request("/skyblock/profiles", &[("uuid", uuid)], true)?;
        let profiles: Option<Vec<Profile>> =
            serde_json::from_value(take_field(&mut body, "profiles")?)?;
        Ok(profiles.unwrap_or_default())
    }

    /// Every bazaar product, keyed by product id.
    pub fn get_bazaar(&self) -> Result<HashMap<String, Product>> {
        let mut body = self.request("/skyblock/bazaar", &[], false)?;
        Ok(serde_json::from_value(take_field(&mut body, "products")?)?)
    }

    /// One page of the auction house. Pages count from zero.
    pub fn get_auctions(&self, page: u32) -> Result<AuctionHouse> {
        let page = page.to_string();
        let body = self.request("/skyblock/auctions", &[("page", page.as_str())], false)?;
        AuctionHouse::from_json(Value::Object(body))
    }

    /// Send a request and check the `success` flag of the body. `keyed`
    /// requests carry the API key; the Skyblock market endpoints are public.
    fn request(&self, path: &str, query: &[(&str, &str)], keyed: bool) -> Result<Map<String, Value>> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        let query = query
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let headers = if keyed {
            vec![(KEY_HEADER.to_string(), self.key.clone())]
        } else {
            vec![]
        };

        let request = Request {
            url,
            query,
            headers,
        };
        debug!("GET {} {:?}", request.url, request.query);

        let response = self.transport.get(&request).map_err(Error::Transport)?;
        debug!("{} answered {}", request.url, response.status);

        let body = match serde_json::from_str::<Value>(&response.body)? {
            Value::Object(body) => body,
            _ => {
                return Err(Error::MalformedResponse(format!(
                    "body of {} is not an object",
                    path
                )))
            }
        };

        match body.get("success").and_then(Value::as_bool) {
            Some(true) => Ok(body),
            Some(false) => Err(Error::Api {
                status: response.status,
                cause: body
                    .get("cause")
                    .and_then(Value::as_str)
                    .unwrap_or("no cause given")
                    .to_string(),
            }),
            None => Err(Error::MalformedResponse(format!(
                "body of {} has no success flag",
                path
            ))),
        }
    }
}

impl<T> std::fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

fn take_field(body: &mut Map<String, Value>, name: &str) -> Result<Value> {
    body.remove(name)
        .ok_or_else(|| Error::MalformedResponse(format!("missing field {:?}", name)))
}

// src/dexscreener/models.rs
use serde::{Deserialize, Serialize};

/// Body of `GET /latest/dex/search`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub pairs: Option<Vec<DexPair>>,
}

/// One trading pair. Every field the bot reads is optional; defaults are
/// applied when converting into `TokenMetrics`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DexPair {
    #[serde(default)]
    pub base_token: Option<BaseToken>,
    #[serde(default, with = "optional_string_or_float")]
    pub price_usd: Option<f64>,
    #[serde(default)]
    pub liquidity: Option<Liquidity>,
    #[serde(default)]
    pub volume: Option<Volume>,
    #[serde(default, with = "optional_string_or_float")]
    pub fdv: Option<f64>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseToken {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Liquidity {
    #[serde(default, with = "optional_string_or_float")]
    pub usd: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    #[serde(default, with = "optional_string_or_float")]
    pub h24: Option<f64>,
}

// Numeric fields arrive either as JSON numbers or as decimal strings ("priceUsd")
pub mod optional_string_or_float {
    use serde::{self, Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_f64(*v),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OptionalStringOrFloat;

        impl<'de> serde::de::Visitor<'de> for OptionalStringOrFloat {
            type Value = Option<f64>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("null, a float or a string containing a float")
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(None)
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(None)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_any(self)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                value
                    .trim()
                    .parse::<f64>()
                    .map(Some)
                    .map_err(serde::de::Error::custom)
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                self.visit_str(&value)
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Some(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Some(value as f64))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Some(value as f64))
            }
        }

        deserializer.deserialize_option(OptionalStringOrFloat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_response_with_string_price() {
        let body = r#"{
            "schemaVersion": "1.0.0",
            "pairs": [{
                "chainId": "solana",
                "url": "https://dexscreener.com/solana/abc",
                "baseToken": { "address": "Mint111", "name": "Bonk", "symbol": "BONK" },
                "priceUsd": "0.00002314",
                "volume": { "h24": 123456.78, "h6": 1000 },
                "liquidity": { "usd": 4200, "base": 1, "quote": 2 },
                "fdv": 1500000000
            }]
        }"#;

        let response: SearchResponse = serde_json::from_str(body).unwrap();
        let pairs = response.pairs.unwrap();
        assert_eq!(pairs.len(), 1);

        let pair = &pairs[0];
        assert_eq!(pair.base_token.as_ref().unwrap().symbol.as_deref(), Some("BONK"));
        assert_eq!(pair.price_usd, Some(0.00002314));
        assert_eq!(pair.liquidity.as_ref().unwrap().usd, Some(4200.0));
        assert_eq!(pair.volume.as_ref().unwrap().h24, Some(123456.78));
        assert_eq!(pair.fdv, Some(1_500_000_000.0));
    }

    #[test]
    fn missing_and_null_fields_become_none() {
        let body = r#"{ "pairs": [{ "priceUsd": null, "liquidity": {} }] }"#;

        let response: SearchResponse = serde_json::from_str(body).unwrap();
        let pair = &response.pairs.unwrap()[0];
        assert_eq!(pair.price_usd, None);
        assert_eq!(pair.liquidity.as_ref().unwrap().usd, None);
        assert!(pair.base_token.is_none());
        assert!(pair.volume.is_none());
        assert!(pair.fdv.is_none());
        assert!(pair.url.is_none());
    }

    #[test]
    fn null_pairs_is_an_empty_result() {
        let response: SearchResponse =
            serde_json::from_str(r#"{ "schemaVersion": "1.0.0", "pairs": null }"#).unwrap();
        assert!(response.pairs.is_none());
    }

    #[test]
    fn garbage_price_is_rejected() {
        let body = r#"{ "pairs": [{ "priceUsd": "not-a-number" }] }"#;
        assert!(serde_json::from_str::<SearchResponse>(body).is_err());
    }
}

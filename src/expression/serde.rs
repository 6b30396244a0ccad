use std::{fmt, marker::PhantomData, str::FromStr};

use num::Float;
use serde::{de, de::Visitor, Deserialize, Deserializer, Serialize, Serializer};

use crate::SplitEx;

impl<T: Float + FromStr> Serialize for SplitEx<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.unparse())
    }
}

impl<'de, T: Float + FromStr> Deserialize<'de> for SplitEx<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(SplitExVisitor {
            float_dummy: PhantomData,
        })
    }
}

#[derive(Debug)]
struct SplitExVisitor<T> {
    float_dummy: PhantomData<T>,
}

impl<'de, T: Float + FromStr> Visitor<'de> for SplitExVisitor<T> {
    type Value = SplitEx<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a str that can be parsed by `splitex` crate")
    }

    fn visit_str<E>(self, unparsed: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        let expr = Self::Value::from_str(unparsed);
        expr.map_err(|epe| E::custom(format!("Parse error - {}", epe.msg)))
    }
}

#[cfg(test)]
use serde_test::Token;

#[test]
fn test_ser_de() {
    let test = |s: &'static str, reference: f64| {
        let expr = SplitEx::<f64>::from_str(s).unwrap();
        serde_test::assert_ser_tokens(&expr, &[Token::Str(s)]);
        serde_test::assert_de_tokens(&expr, &[Token::Str(s)]);
        let serialized = serde_json::to_string(&expr).unwrap();
        let deserialized = serde_json::from_str::<SplitEx<f64>>(serialized.as_str()).unwrap();
        assert_eq!(s, format!("{}", deserialized));
        assert_eq!(deserialized.eval(), reference);
    };

    test("1 + 2 * 3", 7.0);
    test("(2 ^ 2) ^ 2", 16.0);
    test("-1 - 2 - 3", -6.0);
    test("", 0.0);
}

#[test]
fn test_de_error() {
    serde_test::assert_de_tokens_error::<SplitEx<f64>>(
        &[Token::Str("a")],
        "Parse error - expression must contain at least one digit",
    );
    assert!(serde_json::from_str::<SplitEx<f64>>("\"(1 + x\"").is_err());
}

/*

    Provide utilities to parse JSON body documents.

    This format currently assumes:
        - Scalar fields can be given in quotes (e.g. "6") or as is (6)
        - Vector3 data fields are either "<a> <a> <a>" strings or
          arrays [<a>, <a>, <a>] where <a> is integer or float

    @date: 2 Dec, 2025
    @author: bartu
*/

use std::fmt::{self};
use std::fs::File;
use std::io::BufReader;

use serde_json::{self, Value};
use serde::{Deserialize, Deserializer};
use serde::de::{self, Visitor, SeqAccess};

use crate::numeric::{Float, Vector3};
use crate::json_structs::RootDocument;
use crate::prelude::*;

pub fn load_document(path: &str) -> Result<RootDocument, Box<dyn std::error::Error>> {

    let span = tracing::span!(tracing::Level::INFO, "load_document");
    let _enter = span.enter();

    // Open file
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    debug!("Reading body document from {}", path);

    // Parse JSON into RootDocument
    let root: RootDocument = serde_json::from_reader(reader)?;
    Ok(root)
}

// Handles floats as string or number
pub(crate) fn deser_float<'de, D>(deserializer: D) -> Result<Float, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Value = Deserialize::deserialize(deserializer)?;
    match s {
        Value::Number(n) => n.as_f64()
            .map(|v| v as Float)
            .ok_or_else(|| de::Error::custom("Invalid float")),
        Value::String(s) => s.parse::<Float>()
            .map_err(|_| de::Error::custom("Failed to parse float from string")),
        t => Err(de::Error::custom(format!("Expected float or string, found {t}"))),
    }
}

// Handles bools as bool, string or 0/1
pub(crate) fn deser_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let v: Value = Deserialize::deserialize(deserializer)?;
    match v {
        Value::Bool(b) => Ok(b),
        Value::Number(n) => Ok(n.as_i64().unwrap_or(0) != 0),
        Value::String(s) => match s.to_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => Err(de::Error::custom(format!("invalid bool '{}'", other))),
        },
        t => Err(de::Error::custom(format!("Expected bool or string, found {t}"))),
    }
}

pub(crate) fn deser_vec3<'de, D>(deserializer: D) -> Result<Vector3, D::Error>
where
    D: Deserializer<'de>,
{
    struct Vec3Visitor;

    impl<'de> Visitor<'de> for Vec3Visitor {
        type Value = Vector3;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a Vec3 as a string 'x y z' or an array [x, y, z]")
        }

        // Given "X Y Z"
        fn visit_str<E>(self, value: &str) -> Result<Vector3, E>
        where
            E: de::Error,
        {
            parse_vec3_str(value).map_err(de::Error::custom)
        }

        // Given [X, Y, Z]
        fn visit_seq<A>(self, mut seq: A) -> Result<Vector3, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let x: Float = seq
                .next_element()?
                .ok_or_else(|| de::Error::custom("Expected 3 elements in Vec3 array"))?;
            let y: Float = seq
                .next_element()?
                .ok_or_else(|| de::Error::custom("Expected 3 elements in Vec3 array"))?;
            let z: Float = seq
                .next_element()?
                .ok_or_else(|| de::Error::custom("Expected 3 elements in Vec3 array"))?;
            if seq.next_element::<Float>()?.is_some() {
                return Err(de::Error::custom("Expected only 3 elements in Vec3 array"));
            }
            Ok(Vector3::new(x, y, z))
        }
    }

    deserializer.deserialize_any(Vec3Visitor)
}

pub fn deser_vecvec3<'de, D>(deserializer: D) -> Result<Vec<Vector3>, D::Error>
where
    D: Deserializer<'de>,
{
    // Deserialize a vector of Vector3
    // given either a single string of "X Y Z" or
    // array of strings ["X1 Y1 Z1", "X2 Y2 Z2", ...]
    struct VecVec3Visitor;

    impl<'de> Visitor<'de> for VecVec3Visitor {
        type Value = Vec<Vector3>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string 'X Y Z' or an array of such strings")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![parse_vec3_str(v).map_err(de::Error::custom)?])
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(elem) = seq.next_element::<String>()? {
                vec.push(parse_vec3_str(&elem).map_err(de::Error::custom)?);
            }
            Ok(vec)
        }
    }

    deserializer.deserialize_any(VecVec3Visitor)
}

/// Helper function: parse a string like "25 25 25" into Vector3
fn parse_vec3_str(s: &str) -> Result<Vector3, String> {
    let parts: Vec<&str> = s.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(format!("Expected 3 values, got {}", parts.len()));
    }
    let x = parts[0].parse::<Float>().map_err(|e| e.to_string())?;
    let y = parts[1].parse::<Float>().map_err(|e| e.to_string())?;
    let z = parts[2].parse::<Float>().map_err(|e| e.to_string())?;
    Ok(Vector3::new(x, y, z))
}

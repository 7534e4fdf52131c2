/*

    Provide utilities to parse JSON probe files.

    The format is loose to ease hand editing:
        - Numbers may be given as strings (e.g. "6") or as is
        - Vector3 data fields are either "<a> <a> <a>" or [a, a, a]
          where <a> is integer or float

    e.g. In JSON file both
    "Precision": "3" and "Precision": 3
    works as Precision: usize in source code

    @date: 2 Oct, 2025
    @author: bartu
*/

use std::fmt;
use std::fs::File;
use std::io::BufReader;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::prelude::*;
use crate::probe::RootProbe;

pub fn parse_probe_json(path: &str) -> Result<RootProbe, Box<dyn std::error::Error>> {

    let span = tracing::span!(tracing::Level::INFO, "load_probe");
    let _enter = span.enter();

    // Open file
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    debug!("Reading file from {}", path);

    // Parse JSON into probe
    let root: RootProbe = serde_json::from_reader(reader)?;
    Ok(root)
}

pub(crate) fn deser_usize<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    /*
        Deserialize usize type given as either string or number in JSON
    */
    let s: Value = Deserialize::deserialize(deserializer)?;
    match s {
        Value::Number(n) => n.as_u64()
            .map(|v| v as usize)
            .ok_or_else(|| de::Error::custom("Invalid integer")),
        Value::String(s) => s.trim().parse::<usize>()
            .map_err(|_| de::Error::custom("Failed to parse integer from string")),
        t => Err(de::Error::custom(format!("Expected int or string, found {:#?}", t))),
    }
}

fn value_to_float(v: &Value) -> Result<Float, String> {
    match v {
        Value::Number(n) => n.as_f64().ok_or_else(|| String::from("Invalid float")),
        Value::String(s) => s.trim().parse::<Float>().map_err(|e| e.to_string()),
        t => Err(format!("Expected float or string, found {t}")),
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
            let mut xyz = [0.0 as Float; 3];
            for c in xyz.iter_mut() {
                let v: Value = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::custom("Expected 3 elements in Vec3 array"))?;
                *c = value_to_float(&v).map_err(de::Error::custom)?;
            }
            if seq.next_element::<Value>()?.is_some() {
                return Err(de::Error::custom("Expected only 3 elements in Vec3 array"));
            }
            Ok(Vector3::from_array(xyz))
        }
    }

    deserializer.deserialize_any(Vec3Visitor)
}

pub(crate) fn deser_opt_vec3<'de, D>(deserializer: D) -> Result<Option<Vector3>, D::Error>
where
    D: Deserializer<'de>,
{
    deser_vec3(deserializer).map(Some)
}

pub(crate) fn deser_float_vec<'de, D>(deserializer: D) -> Result<Vec<Float>, D::Error>
where
    D: Deserializer<'de>,
{
    // Either "0 2 3.5" or [0, "2", 3.5]
    let s: Value = Deserialize::deserialize(deserializer)?;
    match s {
        Value::String(s) => parse_float_list(&s).map_err(de::Error::custom),
        Value::Array(values) => values
            .iter()
            .map(|v| value_to_float(v).map_err(de::Error::custom))
            .collect(),
        Value::Null => Ok(vec![]),
        t => Err(de::Error::custom(format!("Expected list of floats, found {t}"))),
    }
}

pub(crate) fn deser_opt_float_vec<'de, D>(deserializer: D) -> Result<Option<Vec<Float>>, D::Error>
where
    D: Deserializer<'de>,
{
    deser_float_vec(deserializer).map(Some)
}

// Flat triples, "x1 y1 z1 x2 y2 z2 ..."
pub(crate) fn deser_points<'de, D>(deserializer: D) -> Result<Vec<Point3>, D::Error>
where
    D: Deserializer<'de>,
{
    let flat = deser_float_vec(deserializer)?;
    if flat.len() % 3 != 0 {
        return Err(de::Error::custom(format!(
            "Expected point coordinates in triples, got {} values", flat.len()
        )));
    }
    Ok(flat.chunks_exact(3).map(|c| Point3::new(c[0], c[1], c[2])).collect())
}

fn parse_float_list(s: &str) -> Result<Vec<Float>, String> {
    s.split_whitespace()
        .map(|x| x.parse::<Float>().map_err(|e| format!("'{}': {}", x, e)))
        .collect()
}

fn parse_vec3_str(s: &str) -> Result<Vector3, String> {
    let parts = parse_float_list(s)?;
    if parts.len() != 3 {
        return Err(format!("Expected 3 values, got {}", parts.len()));
    }
    Ok(Vector3::new(parts[0], parts[1], parts[2]))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Fields {
        #[serde(deserialize_with = "deser_usize")]
        n: usize,
        #[serde(deserialize_with = "deser_vec3")]
        v: Vector3,
        #[serde(deserialize_with = "deser_points")]
        p: Vec<Point3>,
    }

    #[test]
    fn accepts_strings_and_numbers() {
        let a: Fields = serde_json::from_str(r#"{"n": "4", "v": "1 2 3", "p": "0 0 0 1 1 1"}"#).unwrap();
        let b: Fields = serde_json::from_str(r#"{"n": 4, "v": [1, "2", 3.0], "p": [0, 0, 0, 1, 1, 1]}"#).unwrap();
        for x in [a, b] {
            assert_eq!(x.n, 4);
            assert_eq!(x.v, Vector3::new(1., 2., 3.));
            assert_eq!(x.p, vec![Point3::ZERO, Point3::ONE]);
        }
    }

    #[test]
    fn rejects_malformed_vectors() {
        assert!(serde_json::from_str::<Fields>(r#"{"n": 1, "v": "1 2", "p": ""}"#).is_err());
        assert!(serde_json::from_str::<Fields>(r#"{"n": 1, "v": [1, 2, 3, 4], "p": ""}"#).is_err());
        assert!(serde_json::from_str::<Fields>(r#"{"n": 1, "v": "1 2 3", "p": "1 2"}"#).is_err());
        assert!(serde_json::from_str::<Fields>(r#"{"n": 1, "v": "1 x 3", "p": ""}"#).is_err());
    }
}

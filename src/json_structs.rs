/*

    Declare data structs needed to parse JSON body documents.

    - RootDocument: top level "Body" (single or array) + "Queries"
    - BodyJSON: tagged mirror of the body variants, recursive for Compound
    - SingleOrVec
    - Queries: containment probe points and the boxify toggle

    Numeric validation happens in build( ), before any body is
    constructed, so the geometry core only ever sees valid trees.

    @date: 2 Dec, 2025
    @author: Bartu
*/

use std::error::Error;

use crate::bodies::{BodyList, Compound, Cuboid, Cylinder, HeapAllocatedBody, Sphere};
use crate::prelude::*;


// To handle JSON file having a single <object>
// or an array of <object>s
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum SingleOrVec<T> {
    Empty,
    Single(T),
    Multiple(Vec<T>),
}

impl<T: Clone> SingleOrVec<T>  {
    pub fn all(&self) -> Vec<T> {
        match &self {
            SingleOrVec::Empty => vec![],
            SingleOrVec::Single(t) => vec![t.clone()],
            SingleOrVec::Multiple(vec) => vec.clone(),
        }
    }
}

impl<T> Default for SingleOrVec<T> {
    fn default() -> Self {
        SingleOrVec::Empty
    }
}


#[derive(Debug, Deserialize)]
pub struct RootDocument {
    #[serde(rename = "Body", default)]
    pub bodies: SingleOrVec<BodyJSON>,

    #[serde(rename = "Queries", default)]
    pub queries: Queries,
}

impl RootDocument {
    /// Builds every declared body, bottom-up. Fails on a document
    /// without bodies or with invalid fields anywhere in the tree.
    pub fn build_all(&self) -> Result<BodyList, Box<dyn Error>> {
        let declared = self.bodies.all();
        if declared.is_empty() {
            return Err("Document defines no Body".into());
        }
        declared.iter().map(|json| json.build()).collect()
    }
}


#[derive(Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Queries {
    #[serde(rename = "Contains", deserialize_with = "deser_vecvec3")]
    pub contains: Vec<Vector3>,

    #[default = true]
    #[serde(rename = "Boxify", deserialize_with = "deser_bool")]
    pub boxify: bool,
}


// =======================================================================================================
// Body variants as they appear in the document
// =======================================================================================================

#[derive(Debug, Deserialize, Clone)]
pub enum BodyJSON {
    Sphere(SphereJSON),
    Cuboid(CuboidJSON),
    Cylinder(CylinderJSON),
    Compound(CompoundJSON),
}

#[derive(Debug, Deserialize, Clone)]
pub struct SphereJSON {
    #[serde(rename = "Position", deserialize_with = "deser_vec3")]
    pub position: Vector3,

    #[serde(rename = "Radius", deserialize_with = "deser_float")]
    pub radius: Float,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CuboidJSON {
    #[serde(rename = "Position", deserialize_with = "deser_vec3")]
    pub position: Vector3,

    // Full extents "sx sy sz"
    #[serde(rename = "Size", deserialize_with = "deser_vec3")]
    pub size: Vector3,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CylinderJSON {
    #[serde(rename = "Position", deserialize_with = "deser_vec3")]
    pub position: Vector3,

    #[serde(rename = "Height", deserialize_with = "deser_float")]
    pub height: Float,

    #[serde(rename = "Radius", deserialize_with = "deser_float")]
    pub radius: Float,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CompoundJSON {
    #[serde(rename = "Parts")]
    pub parts: Vec<BodyJSON>,
}

impl BodyJSON {
    pub fn build(&self) -> Result<HeapAllocatedBody, Box<dyn Error>> {
        match self {
            BodyJSON::Sphere(json) => {
                if json.radius < 0. {
                    return Err(format!("Sphere radius must be non-negative, got {}", json.radius).into());
                }
                Ok(Arc::new(Sphere::new(json.position, json.radius)))
            }
            BodyJSON::Cuboid(json) => {
                if json.size.min_element() < 0. {
                    return Err(format!("Cuboid sizes must be non-negative, got {:?}", json.size).into());
                }
                Ok(Arc::new(Cuboid::new(json.position, json.size.x, json.size.y, json.size.z)))
            }
            BodyJSON::Cylinder(json) => {
                if json.height < 0. || json.radius < 0. {
                    return Err(format!(
                        "Cylinder height and radius must be non-negative, got height {} radius {}",
                        json.height, json.radius
                    ).into());
                }
                Ok(Arc::new(Cylinder::new(json.position, json.height, json.radius)))
            }
            BodyJSON::Compound(json) => {
                if json.parts.is_empty() {
                    return Err("Compound requires at least one part".into());
                }
                let parts = json.parts.iter()
                    .map(|part| part.build())
                    .collect::<Result<BodyList, _>>()?;
                Ok(Arc::new(Compound::new(parts)))
            }
        }
    }
}

//! The material catalog: what each ball is made of.

/// Ball materials offered at the console prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Material {
    Rubber,
    Steel,
    Wood,
}

/// Physical and display properties of a ball material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialProperties {
    pub mass: f64,
    pub radius: f64,
    pub restitution: f64,
    /// Display colour as RGB.
    pub color: [u8; 3],
}

const RUBBER: MaterialProperties = MaterialProperties {
    mass: 1.0,
    radius: 20.0,
    restitution: 0.8,
    color: [255, 0, 0],
};

const STEEL: MaterialProperties = MaterialProperties {
    mass: 3.0,
    radius: 20.0,
    restitution: 0.3,
    color: [100, 100, 100],
};

impl Material {
    /// Maps a console selector (1, 2, 3) to a material.
    pub fn from_selector(selector: i64) -> Option<Self> {
        match selector {
            1 => Some(Material::Rubber),
            2 => Some(Material::Steel),
            3 => Some(Material::Wood),
            _ => None,
        }
    }

    pub fn selector(self) -> i64 {
        match self {
            Material::Rubber => 1,
            Material::Steel => 2,
            Material::Wood => 3,
        }
    }

    /// Catalog lookup.
    ///
    /// Wood is advertised at the prompt but has no agreed mass, radius or
    /// restitution yet, so it has no entry and cannot become a ball.
    pub fn properties(self) -> Option<MaterialProperties> {
        match self {
            Material::Rubber => Some(RUBBER),
            Material::Steel => Some(STEEL),
            Material::Wood => None,
        }
    }

    /// Label used in the console menu.
    pub fn label(self) -> &'static str {
        match self {
            Material::Rubber => "Rubber Ball (Bouncy)",
            Material::Steel => "Steel Ball (Less Bouncy)",
            Material::Wood => "Wooden Ball (Medium Bouncy)",
        }
    }

    /// Every material in menu order.
    pub fn all() -> [Material; 3] {
        [Material::Rubber, Material::Steel, Material::Wood]
    }
}

/// Resolves a raw selector straight to catalog properties.
pub fn lookup(selector: i64) -> Option<(Material, MaterialProperties)> {
    let material = Material::from_selector(selector)?;
    material.properties().map(|properties| (material, properties))
}

/// Semantic classes of the synthetic street scene fixture.
pub struct ClassInfo {
    pub id: u8,
    pub name: &'static str,
}

pub const CLASS_MAP: &[ClassInfo] = &[
    ClassInfo {
        id: 0,
        name: "vehicle",
    },
    ClassInfo {
        id: 1,
        name: "tree",
    },
    ClassInfo {
        id: 2,
        name: "pedestrian",
    },
];

pub fn get_class_name(id: u8) -> String {
    CLASS_MAP
        .iter()
        .find(|c| c.id == id)
        .map_or("unknown", |c| c.name)
        .to_string()
}

/// Gaussian cluster parameters for one class.
/// Axes are sampled independently with the given per-axis standard deviation.
pub struct ClassDefinitionLiteral {
    pub id: u8,
    pub mean: [f64; 3],
    pub stddev: [f64; 3],
    pub count: u32,
}

/// Compact cluster of car returns.
pub const VEHICLE: ClassDefinitionLiteral = ClassDefinitionLiteral {
    id: 0,
    mean: [5.0, 0.0, 0.0],
    stddev: [0.5, 0.5, 0.5],
    count: 100,
};

/// Vertically stretched cluster.
pub const TREE: ClassDefinitionLiteral = ClassDefinitionLiteral {
    id: 1,
    mean: [0.0, 5.0, 0.0],
    stddev: [0.3, 1.0, 0.3],
    count: 80,
};

/// Small, tight cluster.
pub const PEDESTRIAN: ClassDefinitionLiteral = ClassDefinitionLiteral {
    id: 2,
    mean: [-5.0, 0.0, 0.0],
    stddev: [0.2, 0.2, 0.2],
    count: 50,
};

/// Default classes in serialisation order.
pub const DEFAULT_CLASSES: &[ClassDefinitionLiteral] = &[VEHICLE, TREE, PEDESTRIAN];

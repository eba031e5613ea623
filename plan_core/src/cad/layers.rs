//! Fixed drawing layers.

/// Drawing layer with its AutoCAD color index and line type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Plot outline
    Terrain,
    /// Outer (load-bearing) walls
    LoadBearingWalls,
    /// Inner wall faces / partitions
    Partitions,
    /// Doors and windows
    Openings,
    /// Dimension labels
    Dimensions,
    /// Room labels and title block
    Text,
    /// Furniture (declared, not drawn yet)
    Furniture,
}

impl Layer {
    /// All layers in table order
    pub const ALL: [Layer; 7] = [
        Layer::Terrain,
        Layer::LoadBearingWalls,
        Layer::Partitions,
        Layer::Openings,
        Layer::Dimensions,
        Layer::Text,
        Layer::Furniture,
    ];

    /// Layer name as written to the file
    pub fn name(&self) -> &'static str {
        match self {
            Layer::Terrain => "TERRAIN",
            Layer::LoadBearingWalls => "MURS_PORTEURS",
            Layer::Partitions => "MURS_CLOISONS",
            Layer::Openings => "OUVERTURES",
            Layer::Dimensions => "COTATIONS",
            Layer::Text => "TEXTE",
            Layer::Furniture => "MOBILIER",
        }
    }

    /// AutoCAD Color Index
    pub fn color(&self) -> u8 {
        match self {
            Layer::Terrain => 30,          // orange
            Layer::LoadBearingWalls => 1,  // red
            Layer::Partitions => 3,        // green
            Layer::Openings => 5,          // blue
            Layer::Dimensions => 7,        // white
            Layer::Text => 7,              // white
            Layer::Furniture => 8,         // grey
        }
    }

    pub fn line_type(&self) -> &'static str {
        match self {
            Layer::Terrain => "DASHDOT",
            _ => "CONTINUOUS",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_table() {
        let names: Vec<_> = Layer::ALL.iter().map(Layer::name).collect();
        assert_eq!(
            names,
            vec!["TERRAIN", "MURS_PORTEURS", "MURS_CLOISONS", "OUVERTURES", "COTATIONS", "TEXTE", "MOBILIER"]
        );
    }

    #[test]
    fn test_terrain_is_dashdot() {
        assert_eq!(Layer::Terrain.line_type(), "DASHDOT");
        assert_eq!(Layer::Terrain.color(), 30);
        assert_eq!(Layer::Openings.line_type(), "CONTINUOUS");
    }
}

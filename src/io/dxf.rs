use crate::io::IoError;
use crate::sketch::Sketch;
use dxf::Drawing;
use dxf::LwPolylineVertex;
use dxf::entities::{Entity, EntityType, LwPolyline};
use dxf::enums::AcadVersion;
use std::fmt::Debug;

impl<S: Clone + Debug + Send + Sync> Sketch<S> {
    #[doc = " Export the outlines of this sketch to DXF."]
    #[doc = ""]
    #[doc = " Every ring (exteriors and holes) becomes one closed `LWPOLYLINE` in the XY plane"]
    #[doc = " of an AutoCAD 2000 drawing, ready to be used as a CAD sketch profile."]
    #[doc = ""]
    #[doc = " # Returns"]
    #[doc = " A `Result` containing the DXF file as a byte vector or an error if exporting fails."]
    pub fn to_dxf(&self) -> Result<Vec<u8>, IoError> {
        if self.is_empty() {
            return Err(IoError::MalformedInput(
                "cannot export an empty sketch to DXF".to_string(),
            ));
        }

        let mut drawing = Drawing::new();
        drawing.header.version = AcadVersion::R2000;

        for polygon in &self.geometry {
            for ring in std::iter::once(polygon.exterior()).chain(polygon.interiors()) {
                let mut polyline = LwPolyline::default();
                polyline.set_is_closed(true);
                // the closing coordinate is implied by the closed flag
                let open = ring.0.len().saturating_sub(1);
                polyline.vertices.extend(ring.0[..open].iter().map(|c| LwPolylineVertex {
                    x: c.x as f64,
                    y: c.y as f64,
                    ..Default::default()
                }));
                drawing.add_entity(Entity::new(EntityType::LwPolyline(polyline)));
            }
        }

        let mut buffer = Vec::new();
        drawing.save(&mut buffer)?;
        Ok(buffer)
    }
}

//! Static vertex attribute buffers handed to the backend once per scene.
//!
//! Each attribute is a flat `f32` array with a fixed component count per
//! vertex, matching a pre-linked shader attribute by name.

use bytemuck::Pod;

/// One named vertex attribute stream.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// Shader attribute name (`position`, `size`, `vPosition`, `vColor`).
    pub name: &'static str,
    /// Floats per vertex.
    pub components: usize,
    /// Tightly packed vertex data.
    pub data: Vec<f32>,
}

impl Attribute {
    /// Attribute from any slice of plain-old-data vertices whose layout is
    /// a whole number of `f32`s (e.g. `[f32; 4]`, `Vec3`, `f32`).
    #[must_use]
    pub fn from_pod<T: Pod>(name: &'static str, components: usize, values: &[T]) -> Self {
        Self {
            name,
            components,
            data: bytemuck::cast_slice::<T, f32>(values).to_vec(),
        }
    }

    /// Number of vertices described.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        if self.components == 0 {
            0
        } else {
            self.data.len() / self.components
        }
    }

    /// Raw bytes ready for a GPU upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }
}

/// The attribute set for one scene.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeBuffers {
    attributes: Vec<Attribute>,
}

impl AttributeBuffers {
    /// Empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute stream (builder style).
    #[must_use]
    pub fn with(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Look up an attribute by shader name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// All attribute streams in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }

    /// Vertex count shared by every stream, or `None` if the streams
    /// disagree or there are none.
    #[must_use]
    pub fn vertex_count(&self) -> Option<usize> {
        let mut counts = self.attributes.iter().map(Attribute::vertex_count);
        let first = counts.next()?;
        counts.all(|c| c == first).then_some(first)
    }

    /// Total bytes across all streams.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.attributes.iter().map(|a| a.as_bytes().len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn pod_vertices_flatten_in_order() {
        let attr = Attribute::from_pod("position", 3, &[Vec3::X, Vec3::new(1.0, 2.0, 3.0)]);
        assert_eq!(attr.data, vec![1.0, 0.0, 0.0, 1.0, 2.0, 3.0]);
        assert_eq!(attr.vertex_count(), 2);
        assert_eq!(attr.as_bytes().len(), 24);
    }

    #[test]
    fn mismatched_streams_have_no_vertex_count() {
        let buffers = AttributeBuffers::new()
            .with(Attribute::from_pod("position", 3, &[Vec3::ZERO; 4]))
            .with(Attribute::from_pod("size", 1, &[1.0_f32; 3]));
        assert_eq!(buffers.vertex_count(), None);
        assert!(buffers.get("size").is_some());
        assert!(buffers.get("color").is_none());
    }

    #[test]
    fn matching_streams_share_a_count() {
        let buffers = AttributeBuffers::new()
            .with(Attribute::from_pod("vPosition", 4, &[[0.0_f32; 4]; 36]))
            .with(Attribute::from_pod("vColor", 4, &[[1.0_f32; 4]; 36]));
        assert_eq!(buffers.vertex_count(), Some(36));
        assert_eq!(buffers.byte_len(), 2 * 36 * 16);
        assert_eq!(AttributeBuffers::new().vertex_count(), None);
    }
}

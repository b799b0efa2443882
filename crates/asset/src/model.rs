//! Name-to-mesh collection produced by one OBJ parse.

use corelib::Aabb;
use indexmap::IndexMap;

use crate::mesh::Mesh;

/// Meshes keyed by object name, in `o` declaration order. Immutable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjModel {
    meshes: IndexMap<String, Mesh>,
}

impl ObjModel {
    pub(crate) fn new(meshes: IndexMap<String, Mesh>) -> Self {
        Self { meshes }
    }

    pub fn meshes(&self) -> &IndexMap<String, Mesh> {
        &self.meshes
    }

    pub fn get(&self, name: &str) -> Option<&Mesh> {
        self.meshes.get(name)
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.meshes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Mesh)> {
        self.meshes.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn into_meshes(self) -> IndexMap<String, Mesh> {
        self.meshes
    }

    /// Union of all mesh bounds.
    pub fn bounds(&self) -> Option<Aabb> {
        self.meshes
            .values()
            .filter_map(Mesh::bounds)
            .reduce(|a, b| a.union(&b))
    }
}

impl<'a> IntoIterator for &'a ObjModel {
    type Item = (&'a String, &'a Mesh);
    type IntoIter = indexmap::map::Iter<'a, String, Mesh>;

    fn into_iter(self) -> Self::IntoIter {
        self.meshes.iter()
    }
}

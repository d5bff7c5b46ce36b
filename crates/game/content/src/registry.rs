//! Id-indexed view over the loaded content.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use game_core::{Equipment, EquipmentId, GameConfig, Magic, MagicId};

use crate::loaders::{ContentFactory, LoadResult};

/// All definitions a session needs, indexed by id.
///
/// Equipment is stored behind `Arc` so the same instance can be handed to
/// any number of characters. Spells are cloned out, since every character
/// owns its own proficiency state.
#[derive(Clone, Debug, Default)]
pub struct ContentRegistry {
    config: GameConfig,
    equipment: HashMap<EquipmentId, Arc<Equipment>>,
    magic: HashMap<MagicId, Magic>,
    // catalog order, for listing
    equipment_order: Vec<EquipmentId>,
    magic_order: Vec<MagicId>,
}

impl ContentRegistry {
    /// Loads `game.toml`, `equipment.ron` and `magic.ron` from `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> LoadResult<Self> {
        Self::from_factory(&ContentFactory::new(dir.as_ref()))
    }

    pub fn from_factory(factory: &ContentFactory) -> LoadResult<Self> {
        let config = factory.load_config()?;
        let equipment = factory.load_equipment()?;
        let magic = factory.load_magic()?;
        Self::from_parts(config, equipment, magic)
    }

    /// Builds a registry from already-parsed definitions.
    ///
    /// Fails if two definitions of the same kind share an id.
    pub fn from_parts(
        config: GameConfig,
        equipment: Vec<Equipment>,
        magic: Vec<Magic>,
    ) -> LoadResult<Self> {
        let mut registry = Self {
            config,
            ..Self::default()
        };

        for item in equipment {
            if registry.equipment.contains_key(&item.id) {
                anyhow::bail!("Duplicate equipment id: {}", item.id);
            }
            registry.equipment_order.push(item.id.clone());
            registry.equipment.insert(item.id.clone(), Arc::new(item));
        }

        for spell in magic {
            if registry.magic.contains_key(&spell.id) {
                anyhow::bail!("Duplicate magic id: {}", spell.id);
            }
            registry.magic_order.push(spell.id.clone());
            registry.magic.insert(spell.id.clone(), spell);
        }

        Ok(registry)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Shared handle to an equipment definition.
    pub fn equipment(&self, id: &EquipmentId) -> Option<Arc<Equipment>> {
        self.equipment.get(id).cloned()
    }

    /// Fresh copy of a spell definition, ready to be learned.
    pub fn magic(&self, id: &MagicId) -> Option<Magic> {
        self.magic.get(id).cloned()
    }

    /// Equipment in catalog order.
    pub fn equipment_iter(&self) -> impl Iterator<Item = &Arc<Equipment>> {
        self.equipment_order
            .iter()
            .filter_map(|id| self.equipment.get(id))
    }

    /// Spells in catalog order.
    pub fn magic_iter(&self) -> impl Iterator<Item = &Magic> {
        self.magic_order.iter().filter_map(|id| self.magic.get(id))
    }

    pub fn equipment_count(&self) -> usize {
        self.equipment.len()
    }

    pub fn magic_count(&self) -> usize {
        self.magic.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::EquipmentType;

    #[test]
    fn duplicate_equipment_is_rejected() {
        let staff = Equipment::builder("oak_staff", "Oak Staff", EquipmentType::Staff).build();
        let result = ContentRegistry::from_parts(
            GameConfig::default(),
            vec![staff.clone(), staff],
            Vec::new(),
        );

        let err = result.unwrap_err();
        assert!(err.to_string().contains("oak_staff"));
    }

    #[test]
    fn duplicate_magic_is_rejected() {
        let bolt = Magic::builder("spark", "Spark").build();
        let result =
            ContentRegistry::from_parts(GameConfig::default(), Vec::new(), vec![bolt.clone(), bolt]);

        assert!(result.is_err());
    }

    #[test]
    fn lookups_share_equipment_instances() {
        let robe = Equipment::builder("silk_robe", "Silk Robe", EquipmentType::Robe)
            .damage_reduction(0.1)
            .build();
        let registry =
            ContentRegistry::from_parts(GameConfig::default(), vec![robe], Vec::new()).unwrap();

        let id = EquipmentId::from("silk_robe");
        let a = registry.equipment(&id).unwrap();
        let b = registry.equipment(&id).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(registry.equipment(&EquipmentId::from("missing")).is_none());
    }

    #[test]
    fn iteration_keeps_catalog_order() {
        let spells = vec![
            Magic::builder("c", "C").build(),
            Magic::builder("a", "A").build(),
            Magic::builder("b", "B").build(),
        ];
        let registry =
            ContentRegistry::from_parts(GameConfig::default(), Vec::new(), spells).unwrap();

        let ids: Vec<_> = registry.magic_iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
        assert_eq!(registry.magic_count(), 3);
    }
}

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// 方块枚举
/// 出生点判定只关心承重/流体/伤害三类属性,不需要完整的方块注册表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockId {
    Air,
    Stone,
    Dirt,
    Grass,
    Sand,
    Gravel,
    Water,
    Lava,
    Fire,
    Cactus,
    Magma,
    Bedrock,
}

impl BlockId {
    pub fn is_air(&self) -> bool {
        matches!(self, BlockId::Air)
    }

    // 流体:不可承重
    pub fn is_fluid(&self) -> bool {
        matches!(self, BlockId::Water | BlockId::Lava)
    }

    // 伤害性方块:站上去或站进去会掉血
    pub fn is_hazard(&self) -> bool {
        matches!(
            self,
            BlockId::Lava | BlockId::Fire | BlockId::Cactus | BlockId::Magma
        )
    }

    // 可安全承重:非空气、非流体、非伤害,其余一律视为安全地面
    pub fn is_safe_ground(&self) -> bool {
        !self.is_air() && !self.is_fluid() && !self.is_hazard()
    }

    pub fn name(&self) -> &'static str {
        match self {
            BlockId::Air => "minecraft:air",
            BlockId::Stone => "minecraft:stone",
            BlockId::Dirt => "minecraft:dirt",
            BlockId::Grass => "minecraft:grass_block",
            BlockId::Sand => "minecraft:sand",
            BlockId::Gravel => "minecraft:gravel",
            BlockId::Water => "minecraft:water",
            BlockId::Lava => "minecraft:lava",
            BlockId::Fire => "minecraft:fire",
            BlockId::Cactus => "minecraft:cactus",
            BlockId::Magma => "minecraft:magma_block",
            BlockId::Bedrock => "minecraft:bedrock",
        }
    }
}

static BLOCK_BY_NAME: Lazy<HashMap<&'static str, BlockId>> = Lazy::new(|| {
    let all = [
        BlockId::Air,
        BlockId::Stone,
        BlockId::Dirt,
        BlockId::Grass,
        BlockId::Sand,
        BlockId::Gravel,
        BlockId::Water,
        BlockId::Lava,
        BlockId::Fire,
        BlockId::Cactus,
        BlockId::Magma,
        BlockId::Bedrock,
    ];
    all.iter().map(|b| (b.name(), *b)).collect()
});

pub fn block_by_name(name: &str) -> Option<BlockId> {
    BLOCK_BY_NAME.get(name).copied()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_classes() {
        assert!(BlockId::Grass.is_safe_ground());
        assert!(BlockId::Stone.is_safe_ground());
        assert!(BlockId::Bedrock.is_safe_ground());
        // 空气不可承重
        assert!(!BlockId::Air.is_safe_ground());
        // 流体不可承重
        assert!(!BlockId::Water.is_safe_ground());
        assert!(!BlockId::Lava.is_safe_ground());
        // 伤害方块
        assert!(BlockId::Fire.is_hazard());
        assert!(BlockId::Cactus.is_hazard());
        assert!(BlockId::Magma.is_hazard());
        assert!(!BlockId::Magma.is_safe_ground());
    }

    #[test]
    fn test_name_round_trip() {
        assert_eq!(block_by_name("minecraft:lava"), Some(BlockId::Lava));
        assert_eq!(block_by_name("minecraft:grass_block"), Some(BlockId::Grass));
        assert_eq!(block_by_name("minecraft:command_block"), None);
    }
}

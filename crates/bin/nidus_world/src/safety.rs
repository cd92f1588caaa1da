use crate::block::BlockId;

/// 出生点安全判定
/// 以地面格为基准:脚下方块可承重且非危险,其上两格无遮挡(可站立)
pub fn is_safe_ground(feet: BlockId, above1: BlockId, above2: BlockId) -> bool {
    feet.is_safe_ground() && above1.is_air() && above2.is_air()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::block::BlockId;

    #[test]
    fn test_safe_ground() {
        assert!(is_safe_ground(BlockId::Grass, BlockId::Air, BlockId::Air));
        assert!(is_safe_ground(BlockId::Stone, BlockId::Air, BlockId::Air));
        assert!(is_safe_ground(BlockId::Sand, BlockId::Air, BlockId::Air));
    }

    #[test]
    fn test_hazard_ground_rejected() {
        assert!(!is_safe_ground(BlockId::Lava, BlockId::Air, BlockId::Air));
        assert!(!is_safe_ground(BlockId::Fire, BlockId::Air, BlockId::Air));
        assert!(!is_safe_ground(BlockId::Cactus, BlockId::Air, BlockId::Air));
        assert!(!is_safe_ground(BlockId::Magma, BlockId::Air, BlockId::Air));
    }

    #[test]
    fn test_unsupported_rejected() {
        // 脚下是空气或流体都不能站
        assert!(!is_safe_ground(BlockId::Air, BlockId::Air, BlockId::Air));
        assert!(!is_safe_ground(BlockId::Water, BlockId::Air, BlockId::Air));
    }

    #[test]
    fn test_obstructed_rejected() {
        // 身位或头位被占都不能站
        assert!(!is_safe_ground(BlockId::Grass, BlockId::Cactus, BlockId::Air));
        assert!(!is_safe_ground(BlockId::Grass, BlockId::Air, BlockId::Stone));
        assert!(!is_safe_ground(BlockId::Grass, BlockId::Water, BlockId::Air));
    }
}

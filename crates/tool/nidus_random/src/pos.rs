use rand::rngs::OsRng;
use rand::Rng;

// 出生点候选列必须不可预测,这里用系统熵源而不是普通伪随机
pub fn column_in_range(radius: i64) -> [i64; 2] {
    let mut rng = OsRng;
    [
        rng.gen_range(-radius..=radius), // x
        rng.gen_range(-radius..=radius), // z
    ]
}

#[cfg(test)]
mod test {
    use super::column_in_range;

    #[test]
    fn test_range() {
        for _ in 0..1000 {
            let [x, z] = column_in_range(100);
            assert!(x >= -100 && x <= 100);
            assert!(z >= -100 && z <= 100);
        }
    }
}

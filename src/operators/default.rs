use super::Mutate;
use crate::data::Candidate;
use rand::Rng;

/// 随温度缩小搜索半径的翻转算子
///
/// 每次随机翻转若干位（可重复抽到同一位），翻转次数与当前温度和初始温度之比成正比
#[derive(Debug, Clone, Copy, Default)]
pub struct TemperatureFlip;

/// 翻转次数 `max(1, floor(length * temperature / t_start))`，且不超过 `length`
///
/// 只有温度高于初始温度时（冷却系数大于 1）上限才会起作用
pub fn flip_count(length: usize, temperature: f64, t_start: f64) -> usize {
    let scaled = (length as f64 * (temperature / t_start)).floor();
    // NaN 转换为 0，正无穷饱和为 usize::MAX
    (scaled as usize).clamp(1, length.max(1))
}

impl Mutate for TemperatureFlip {
    fn generate<R: Rng>(&self, length: usize, rng: &mut R) -> Candidate {
        (0..length).map(|_| rng.random_bool(0.5)).collect()
    }

    fn mutate<R: Rng>(
        &self,
        candidate: &[bool],
        temperature: f64,
        t_start: f64,
        rng: &mut R,
    ) -> Candidate {
        let mut neighbor = candidate.to_vec();
        if neighbor.is_empty() {
            return neighbor;
        }
        for _ in 0..flip_count(neighbor.len(), temperature, t_start) {
            let index = rng.random_range(0..neighbor.len());
            neighbor[index] = !neighbor[index];
        }
        neighbor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn flip_count_scales_with_temperature() {
        assert_eq!(flip_count(8, 100.0, 100.0), 8);
        assert_eq!(flip_count(8, 50.0, 100.0), 4);
        assert_eq!(flip_count(8, 10.0, 100.0), 1);
        assert_eq!(flip_count(8, 0.0, 100.0), 1);
    }

    #[test]
    fn flip_count_degenerate_ratios() {
        assert_eq!(flip_count(8, f64::NAN, 100.0), 1);
        assert_eq!(flip_count(8, 1e300, 1e-300), 8);
        assert_eq!(flip_count(8, 250.0, 100.0), 8);
        assert_eq!(flip_count(0, 100.0, 100.0), 1);
    }

    #[test]
    fn mutate_keeps_length_and_input() {
        let mut rng = StdRng::seed_from_u64(7);
        let original = vec![true, false, true, false, true];
        for temperature in [100.0, 40.0, 1.0, 1e-9] {
            let neighbor = TemperatureFlip.mutate(&original, temperature, 100.0, &mut rng);
            assert_eq!(neighbor.len(), original.len());
        }
        assert_eq!(original, vec![true, false, true, false, true]);
    }

    #[test]
    fn single_flip_changes_exactly_one_bit() {
        let mut rng = StdRng::seed_from_u64(11);
        let original = vec![false; 16];
        for _ in 0..100 {
            let neighbor = TemperatureFlip.mutate(&original, 1.0, 100.0, &mut rng);
            assert_eq!(neighbor.iter().filter(|&&bit| bit).count(), 1);
        }
    }

    #[test]
    fn empty_candidate_is_returned_unchanged() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(TemperatureFlip.mutate(&[], 100.0, 100.0, &mut rng).is_empty());
    }

    #[test]
    fn generate_has_requested_length_and_mixes_bits() {
        let mut rng = StdRng::seed_from_u64(5);
        let candidate = TemperatureFlip.generate(256, &mut rng);
        assert_eq!(candidate.len(), 256);
        let ones = candidate.iter().filter(|&&bit| bit).count();
        assert!(ones > 64 && ones < 192);
    }
}

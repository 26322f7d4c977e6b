//! 算子接口，以及默认变异算子的实现
//!

use crate::data::Candidate;
use rand::Rng;

pub mod default;

pub trait Mutate {
    /// 随机生成一个初始解
    fn generate<R: Rng>(&self, length: usize, rng: &mut R) -> Candidate;

    /// 基于现有的一个解通过随机扰动创建一个新的解，不修改原解
    fn mutate<R: Rng>(
        &self,
        candidate: &[bool],
        temperature: f64,
        t_start: f64,
        rng: &mut R,
    ) -> Candidate;
}

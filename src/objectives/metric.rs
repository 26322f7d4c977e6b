use std::fmt::Display;

/// 一个候选解的评测指标，分数由此计算
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metric {
    pub value: i64,
    pub weight: i64,
    pub volume: i64,
    pub penalty: i64,
}

impl Metric {
    pub fn score(&self) -> f64 {
        self.value.saturating_sub(self.penalty) as f64
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "总价值：{}", self.value)?;
        writeln!(f, "总重量：{}", self.weight)?;
        writeln!(f, "总体积：{}", self.volume)?;
        if self.penalty > 0 {
            writeln!(f, "超限惩罚：{}", self.penalty)?;
        }
        Ok(())
    }
}

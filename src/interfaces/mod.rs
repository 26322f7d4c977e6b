pub mod command_line;

/// 退火过程中向用户反馈的消息类型
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Parameters {
        iterations: usize,
        t_start: f64,
        cooling_rate: f64,
    },
    Progress {
        steps: usize,
        temperature: f64,
        score: f64,
    },
    BetterSolution {
        iteration: usize,
        score: f64,
        metric: String,
    },
    Elapsed {
        time: u64,
    },
}

/// 定义了向用户报告消息的接口，退火算法只写不读
///
/// 命令行只需要实现 post 方法，就可向用户报告各种数据
pub trait Interface {
    fn post(&self, message: Message);
}

/// 丢弃所有消息，参数实验中的大量运行使用它
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Interface for Silent {
    fn post(&self, _message: Message) {}
}

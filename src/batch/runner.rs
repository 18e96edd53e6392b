//! # 批量执行器
//!
//! 并行执行相互独立的带隙计算。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代
//! - 进度条显示
//! - 错误收集与汇总报告
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::error::{AbigapError, Result};
use crate::utils::progress;

use rayon::prelude::*;

/// 单个任务处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult<T> {
    /// 处理成功
    Success(T),
    /// 处理失败
    Failed(String, String), // (任务名称, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug)]
pub struct BatchResult<T> {
    /// 成功结果（保持输入顺序）
    pub successes: Vec<T>,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl<T> Default for BatchResult<T> {
    fn default() -> Self {
        Self {
            successes: Vec::new(),
            failures: Vec::new(),
        }
    }
}

impl<T> BatchResult<T> {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult<T>) {
        match result {
            ProcessResult::Success(value) => self.successes.push(value),
            ProcessResult::Failed(name, err) => self.failures.push((name, err)),
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.successes.len() + self.failures.len()
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    /// 并行处理任务列表
    pub fn run<I, T, F>(&self, items: Vec<I>, processor: F) -> Result<BatchResult<T>>
    where
        I: Sync,
        T: Send,
        F: Fn(&I) -> ProcessResult<T> + Sync + Send,
    {
        let pb = progress::create_progress_bar(items.len() as u64, "Processing");

        // 配置 rayon 线程池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| AbigapError::Other(format!("Failed to build thread pool: {}", e)))?;

        let results: Vec<ProcessResult<T>> = pool.install(|| {
            items
                .par_iter()
                .map(|item| {
                    let result = processor(item);
                    pb.inc(1);
                    result
                })
                .collect()
        });

        pb.finish_and_clear();

        // 汇总结果
        let mut batch_result = BatchResult::default();
        for result in results {
            batch_result.merge(result);
        }

        Ok(batch_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_keeps_order_and_collects_failures() {
        let runner = BatchRunner::new(2);
        let items: Vec<i32> = (1..=6).collect();
        let result = runner
            .run(items, |&n| {
                if n % 3 == 0 {
                    ProcessResult::Failed(n.to_string(), "divisible by 3".to_string())
                } else {
                    ProcessResult::Success(n * 10)
                }
            })
            .unwrap();

        assert_eq!(result.successes, vec![10, 20, 40, 50]);
        assert_eq!(result.failures.len(), 2);
        assert_eq!(result.failures[0].0, "3");
        assert_eq!(result.total(), 6);
    }
}

//! 外部 API 呼び出しのリトライポリシー
//!
//! HTTP 429（`UpstreamError::RateLimited`）だけを指数バックオフでリトライする。
//! それ以外のエラーは即座に呼び出し元へ返す。各試行にはタイムアウトを設ける。

use std::{future::Future, time::Duration};

use crate::domain::UpstreamError;

/// リトライの結果
#[derive(Debug, Clone, PartialEq)]
pub enum RetryOutcome<T> {
    Success { value: T, attempts: u32 },
    /// 全ての試行がレート制限で失敗した
    Exhausted { attempts: u32 },
    /// リトライ対象外のエラーで失敗した
    Failed { error: UpstreamError, attempts: u32 },
}

impl<T> RetryOutcome<T> {
    pub fn attempts(&self) -> u32 {
        match self {
            RetryOutcome::Success { attempts, .. }
            | RetryOutcome::Exhausted { attempts }
            | RetryOutcome::Failed { attempts, .. } => *attempts,
        }
    }

    pub fn into_result(self) -> Result<T, UpstreamError> {
        match self {
            RetryOutcome::Success { value, .. } => Ok(value),
            RetryOutcome::Exhausted { .. } => Err(UpstreamError::RateLimited),
            RetryOutcome::Failed { error, .. } => Err(error),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// 最初の呼び出しを含む試行回数の上限
    max_attempts: u32,
    base_delay: Duration,
    attempt_timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_MAX_ATTEMPTS,
            Self::DEFAULT_BASE_DELAY,
            Self::DEFAULT_ATTEMPT_TIMEOUT,
        )
    }
}

impl RetryPolicy {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(500);
    pub const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(10);

    /// `max_attempts` は 1 未満にならない
    pub fn new(max_attempts: u32, base_delay: Duration, attempt_timeout: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
            attempt_timeout,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn attempt_timeout(&self) -> Duration {
        self.attempt_timeout
    }

    /// `attempt` 回目（1 始まり）の失敗後に待つ時間: `base_delay * 2^(attempt - 1)`
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let factor = 1u32
            .checked_shl(attempt.saturating_sub(1))
            .unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor)
    }

    /// 操作をポリシーに従って実行する
    pub async fn run<T, F, Fut>(&self, mut operation: F) -> RetryOutcome<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, UpstreamError>>,
    {
        let mut attempt = 0;
        loop {
            attempt += 1;

            let result = match tokio::time::timeout(self.attempt_timeout, operation()).await {
                Ok(result) => result,
                Err(_) => Err(UpstreamError::Timeout),
            };

            match result {
                Ok(value) => {
                    if attempt > 1 {
                        tracing::info!("Upstream call succeeded after {} attempts", attempt);
                    }
                    return RetryOutcome::Success {
                        value,
                        attempts: attempt,
                    };
                }
                Err(UpstreamError::RateLimited) if attempt < self.max_attempts => {
                    let delay = self.delay_after(attempt);
                    tracing::warn!(
                        "Upstream rate limited (attempt {}/{}), retrying in {:?}",
                        attempt,
                        self.max_attempts,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(UpstreamError::RateLimited) => {
                    tracing::warn!(
                        "Upstream still rate limited after {} attempts, giving up",
                        attempt
                    );
                    return RetryOutcome::Exhausted { attempts: attempt };
                }
                Err(error) => {
                    return RetryOutcome::Failed {
                        error,
                        attempts: attempt,
                    };
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tokio::time::Instant;

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - 429 のみがリトライされ、試行回数が上限を超えないこと
    // - 待ち時間が毎回 2 倍以上になること（tokio の停止時間で検証）
    // - 各試行のタイムアウト
    // ========================================

    fn policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy::new(
            max_attempts,
            Duration::from_millis(100),
            Duration::from_secs(5),
        )
    }

    /// 呼ばれるたびに `responses` を先頭から返し、呼び出し時刻を記録する操作
    fn scripted(
        responses: Vec<Result<u32, UpstreamError>>,
    ) -> (
        impl FnMut() -> std::future::Ready<Result<u32, UpstreamError>>,
        Arc<Mutex<Vec<Instant>>>,
    ) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let recorded = calls.clone();
        let mut responses = responses.into_iter();
        let operation = move || {
            recorded.lock().unwrap().push(Instant::now());
            std::future::ready(responses.next().unwrap_or(Err(UpstreamError::RateLimited)))
        };
        (operation, calls)
    }

    #[test]
    fn test_delay_doubles_each_attempt() {
        // テスト項目: 待ち時間は試行ごとに 2 倍になる
        // given (前提条件):
        let policy = policy(5);

        // when (操作) / then (期待する結果):
        assert_eq!(policy.delay_after(1), Duration::from_millis(100));
        assert_eq!(policy.delay_after(2), Duration::from_millis(200));
        assert_eq!(policy.delay_after(3), Duration::from_millis(400));
        assert_eq!(policy.delay_after(40), Duration::from_millis(100) * u32::MAX);
    }

    #[test]
    fn test_max_attempts_is_at_least_one() {
        // テスト項目: 試行回数 0 を指定しても最低 1 回は実行される
        // when (操作):
        let policy = policy(0);

        // then (期待する結果):
        assert_eq!(policy.max_attempts(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_succeeds_after_two_rate_limits() {
        // テスト項目: 429 が 2 回続いた後 3 回目で成功すると成功結果が返る
        // given (前提条件):
        let (operation, calls) = scripted(vec![
            Err(UpstreamError::RateLimited),
            Err(UpstreamError::RateLimited),
            Ok(42),
        ]);

        // when (操作):
        let outcome = policy(3).run(operation).await;

        // then (期待する結果):
        assert_eq!(
            outcome,
            RetryOutcome::Success {
                value: 42,
                attempts: 3
            }
        );
        assert_eq!(calls.lock().unwrap().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_gives_up_after_budget_with_exponential_delays() {
        // テスト項目: 試行回数は上限を超えず、待ち時間は毎回 2 倍以上になる
        // given (前提条件):
        let (operation, calls) = scripted(vec![]);

        // when (操作):
        let outcome = policy(4).run(operation).await;

        // then (期待する結果):
        assert_eq!(outcome, RetryOutcome::Exhausted { attempts: 4 });
        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 4);
        let gaps: Vec<Duration> = calls.windows(2).map(|w| w[1] - w[0]).collect();
        assert!(gaps[0] >= Duration::from_millis(100));
        for pair in gaps.windows(2) {
            assert!(pair[1] >= pair[0] * 2, "delays must at least double: {gaps:?}");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_other_errors_are_not_retried() {
        // テスト項目: 429 以外のエラーはリトライされない
        // given (前提条件):
        let (operation, calls) = scripted(vec![Err(UpstreamError::Status(404)), Ok(1)]);

        // when (操作):
        let outcome = policy(3).run(operation).await;

        // then (期待する結果):
        assert_eq!(
            outcome,
            RetryOutcome::Failed {
                error: UpstreamError::Status(404),
                attempts: 1
            }
        );
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_attempt_timeout_is_a_failure() {
        // テスト項目: 応答しない上流はタイムアウトとして失敗する
        // given (前提条件):
        let policy = RetryPolicy::new(3, Duration::from_millis(100), Duration::from_secs(1));
        let started = Instant::now();

        // when (操作):
        let outcome = policy
            .run(|| std::future::pending::<Result<u32, UpstreamError>>())
            .await;

        // then (期待する結果):
        assert_eq!(
            outcome,
            RetryOutcome::Failed {
                error: UpstreamError::Timeout,
                attempts: 1
            }
        );
        assert!(started.elapsed() >= Duration::from_secs(1));
    }

    #[test]
    fn test_into_result() {
        // テスト項目: 結果を Result に変換できる
        // when (操作) / then (期待する結果):
        let exhausted: RetryOutcome<u32> = RetryOutcome::Exhausted { attempts: 3 };
        assert_eq!(exhausted.attempts(), 3);
        assert_eq!(exhausted.into_result(), Err(UpstreamError::RateLimited));
        let success = RetryOutcome::Success {
            value: 1,
            attempts: 1,
        };
        assert_eq!(success.into_result(), Ok(1));
    }
}

//! 车速滤波
//!
//! 由未滤波车速 `v_ego_raw` 估计 `v_ego` 与 `a_ego`。

/// 车速估计器
pub trait SpeedEstimator: Send {
    /// 输入一次未滤波车速，返回 `(v_ego, a_ego)`
    fn update(&mut self, v_ego_raw: f64) -> (f64, f64);

    /// 清空内部状态
    fn reset(&mut self);
}

/// 默认控制周期（秒）
pub const DEFAULT_CONTROL_PERIOD_S: f64 = 0.01;

/// 固定增益（对应 Q = diag(10, 100)、R = 1000 的稳态增益）
const KALMAN_GAIN: [f64; 2] = [0.122_876_73, 0.296_663_09];

/// 原始车速与估计值偏差超过该值（m/s）时直接重置，避免起步瞬间的巨大加速度
const RESET_THRESHOLD: f64 = 2.0;

/// 一维常加速度模型的固定增益卡尔曼滤波
///
/// 状态 `[v, a]`，`A = [[1, dt], [0, 1]]`，`C = [1, 0]`。
#[derive(Debug, Clone)]
pub struct KalmanSpeedFilter {
    x: [f64; 2],
    // (A - K·C·A) 展开后的系数
    a_k: [f64; 4],
    k: [f64; 2],
}

impl KalmanSpeedFilter {
    pub fn new(dt: f64) -> Self {
        let [k0, k1] = KALMAN_GAIN;
        // A = [[1, dt], [0, 1]], C = [1, 0]
        let a = [1.0, dt, 0.0, 1.0];
        let c = [1.0, 0.0];
        Self {
            x: [0.0, 0.0],
            a_k: [
                a[0] - k0 * c[0],
                a[1] - k0 * c[1],
                a[2] - k1 * c[0],
                a[3] - k1 * c[1],
            ],
            k: KALMAN_GAIN,
        }
    }

    /// 当前状态 `[v, a]`
    pub fn state(&self) -> [f64; 2] {
        self.x
    }

    fn set_state(&mut self, v: f64, a: f64) {
        self.x = [v, a];
    }

    fn step(&mut self, meas: f64) -> [f64; 2] {
        let [x0, x1] = self.x;
        self.x = [
            self.a_k[0] * x0 + self.a_k[1] * x1 + self.k[0] * meas,
            self.a_k[2] * x0 + self.a_k[3] * x1 + self.k[1] * meas,
        ];
        self.x
    }
}

impl Default for KalmanSpeedFilter {
    fn default() -> Self {
        Self::new(DEFAULT_CONTROL_PERIOD_S)
    }
}

impl SpeedEstimator for KalmanSpeedFilter {
    fn update(&mut self, v_ego_raw: f64) -> (f64, f64) {
        if (v_ego_raw - self.x[0]).abs() > RESET_THRESHOLD {
            self.set_state(v_ego_raw, 0.0);
        }
        let [v, a] = self.step(v_ego_raw);
        (v, a)
    }

    fn reset(&mut self) {
        self.set_state(0.0, 0.0);
    }
}

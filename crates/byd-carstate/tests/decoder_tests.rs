//! 车型变体解码测试
//!
//! 用自持有的 `SignalBundle` 构造两条总线的快照，验证三种布局的解码结果。

use byd_carstate::*;
use byd_protocol::constants::{DEG_TO_RAD, HUD_MULTIPLIER, KPH_TO_MS};
use byd_protocol::{LookupValue, RawSignalBundle, SignalBundle, VehicleVariant};
use proptest::prelude::*;

fn session(variant: VehicleVariant, enable_bsm: bool) -> CarState {
    CarState::new(DecoderConfig {
        variant,
        enable_bsm,
        ..DecoderConfig::default()
    })
}

fn decode(car_state: &mut CarState, pt: &SignalBundle, cam: &SignalBundle) -> VehicleState {
    car_state.update(&RawSignalBundle::new(pt, cam))
}

/// 原始布局下的典型行驶快照
fn adas_pt() -> SignalBundle {
    SignalBundle::new()
        .with("DRIVE_STATE", "GEAR", 4.0)
        .with("WHEEL_SPEED", "WHEELSPEED_FL", 36.0)
        .with("WHEEL_SPEED", "WHEELSPEED_FR", 37.0)
        .with("WHEEL_SPEED", "WHEELSPEED_BL", 36.0)
        .with("WHEEL_SPEED", "WHEELSPEED_BR", 38.0)
        .with("METER_CLUSTER", "SEATBELT_DRIVER", 1.0)
        .with("PEDAL", "GAS_PEDAL", 0.2)
        .with("PEDAL", "BRAKE_PEDAL", 0.0)
        .with("STEER_MODULE_2", "STEER_ANGLE_2", -12.5)
        .with("STEER_MODULE_2", "DRIVER_EPS_TORQUE", 2.0)
        .with("STEERING_TORQUE", "MAIN_TORQUE", 40.0)
        .with("STALKS", "LEFT_BLINKER", 1.0)
        .with("BSM", "LEFT_APPROACH", 1.0)
}

fn adas_cam() -> SignalBundle {
    SignalBundle::new()
        .with("ACC_HUD_ADAS", "ACC_ON1", 1.0)
        .with("ACC_HUD_ADAS", "SET_SPEED", 80.0)
        .with("ACC_HUD_ADAS", "SET_DISTANCE", 2.0)
        .with("ACC_CMD", "CMD_REQ_ACTIVE_LOW", 0.0)
        .with("ACC_CMD", "STANDSTILL_STATE", 0.0)
        .with("LKAS_HUD_ADAS", "SETTINGS", 19.0)
        .with("LKAS_HUD_ADAS", "TSR", 42.0)
        .with("LKAS_HUD_ADAS", "LKAS_ENABLED", 1.0)
        .with("STEERING_MODULE_ADAS", "EPS_OK", 1.0)
}

// ============================================================================
// AdasCamera
// ============================================================================

#[test]
fn test_adas_camera_full_decode() {
    let mut car_state = session(VehicleVariant::AdasCamera, true);
    let state = decode(&mut car_state, &adas_pt(), &adas_cam());

    assert!((state.wheel_speeds.fl - 10.0).abs() < 1e-9);
    assert!((state.wheel_speeds.rr - 38.0 * KPH_TO_MS).abs() < 1e-9);
    // 左后 + 左前的平均
    assert!((state.v_ego_raw - 10.0).abs() < 1e-9);
    assert!((state.v_ego_cluster - state.v_ego * HUD_MULTIPLIER).abs() < 1e-12);
    assert!(!state.standstill);

    assert_eq!(state.gear_shifter, GearShifter::Drive);
    assert!(!state.door_open);
    assert!(!state.seatbelt_unlatched);
    assert!(state.gas_pressed);
    assert!(!state.brake_pressed);

    assert_eq!(state.steering_angle_deg, -12.5);
    assert_eq!(state.steering_torque, 40.0);
    assert_eq!(state.steering_torque_eps, 2.0);
    assert!(!state.steering_pressed);
    assert!(!state.steer_fault_temporary);
    assert_eq!(state.yaw_rate, 0.0);

    assert!(state.cruise_state.available);
    assert!(state.cruise_state.enabled);
    assert!((state.cruise_state.speed_cluster - 80.0 * KPH_TO_MS).abs() < 1e-12);
    assert!(
        (state.cruise_state.speed - 80.0 * KPH_TO_MS / HUD_MULTIPLIER).abs() < 1e-12
    );
    assert_eq!(state.cruise_state.set_distance.label(), Some("2"));
    assert!(!state.cruise_state.non_adaptive);

    assert!(state.left_blinker);
    assert!(!state.right_blinker);
    assert!(state.left_blindspot);
    assert!(!state.right_blindspot);
    assert!(!state.stock_aeb);
    assert!(!state.stock_fcw);

    let hud = car_state.hud_passthrough();
    assert_eq!(hud.settings, 19);
    assert_eq!(hud.tsr, 42);
    assert!(hud.lka_on);
    assert!(hud.eps_ok);
}

#[test]
fn test_adas_camera_doors_seatbelt_brake() {
    let mut car_state = session(VehicleVariant::AdasCamera, false);
    let pt = adas_pt()
        .with("METER_CLUSTER", "BACK_RIGHT_DOOR", 1.0)
        .with("METER_CLUSTER", "SEATBELT_DRIVER", 0.0)
        .with("PEDAL", "GAS_PEDAL", 0.005)
        .with("PEDAL", "BRAKE_PEDAL", 0.4)
        .with("STEER_MODULE_2", "DRIVER_EPS_TORQUE", 6.5);
    let state = decode(&mut car_state, &pt, &adas_cam());

    assert!(state.door_open);
    assert!(state.seatbelt_unlatched);
    assert!(!state.gas_pressed);
    assert!(state.brake_pressed);
    assert_eq!(state.brake, 0.4);
    assert!(state.steering_pressed);
}

#[test]
fn test_eps_not_ok_reports_temporary_fault() {
    let mut car_state = session(VehicleVariant::AdasCamera, false);
    let cam = adas_cam().with("STEERING_MODULE_ADAS", "EPS_OK", 0.0);
    let state = decode(&mut car_state, &adas_pt(), &cam);

    assert!(state.steer_fault_temporary);
    assert!(!car_state.hud_passthrough().eps_ok);
}

#[test]
fn test_cruise_disabled_and_unavailable() {
    let mut car_state = session(VehicleVariant::AdasCamera, false);
    let cam = adas_cam()
        .with("ACC_HUD_ADAS", "ACC_ON1", 0.0)
        .with("ACC_HUD_ADAS", "ACC_ON2", 0.0)
        .with("ACC_CMD", "CMD_REQ_ACTIVE_LOW", 1.0);
    let state = decode(&mut car_state, &adas_pt(), &cam);

    assert!(!state.cruise_state.available);
    assert!(!state.cruise_state.enabled);
    assert_eq!(state.cruise_state.speed_cluster, 0.0);
    assert_eq!(state.cruise_state.speed, 0.0);
}

#[test]
fn test_cruise_speed_floor() {
    let mut car_state = session(VehicleVariant::AdasCamera, false);
    let cam = adas_cam()
        .with("ACC_HUD_ADAS", "ACC_ON2", 1.0)
        .with("ACC_HUD_ADAS", "SET_SPEED", 10.0);
    let state = decode(&mut car_state, &adas_pt(), &cam);

    assert_eq!(state.cruise_state.speed_cluster, 30.0 * KPH_TO_MS);
    assert_ne!(state.cruise_state.speed_cluster, 10.0 * KPH_TO_MS);
}

#[test]
fn test_blindspot_disabled_holds_false() {
    let mut car_state = session(VehicleVariant::AdasCamera, false);
    let pt = adas_pt().with("BSM", "RIGHT_APPROACH", 1.0);
    let state = decode(&mut car_state, &pt, &adas_cam());

    assert!(!state.left_blindspot);
    assert!(!state.right_blindspot);
}

#[test]
fn test_standstill_on_zero_speed() {
    let mut car_state = session(VehicleVariant::AdasCamera, false);
    let pt = adas_pt()
        .with("WHEEL_SPEED", "WHEELSPEED_FL", 0.0)
        .with("WHEEL_SPEED", "WHEELSPEED_BL", 0.0);
    let state = decode(&mut car_state, &pt, &adas_cam());

    assert_eq!(state.v_ego_raw, 0.0);
    assert!(state.standstill);
}

// ============================================================================
// 值表未命中
// ============================================================================

#[test]
fn test_gear_lookup_miss_only_changes_gear() {
    let mut mapped = session(VehicleVariant::AdasCamera, true);
    let mut unmapped = session(VehicleVariant::AdasCamera, true);

    let pt_unmapped = adas_pt().with("DRIVE_STATE", "GEAR", 13.0);
    let mut expected = decode(&mut mapped, &adas_pt(), &adas_cam());
    let state = decode(&mut unmapped, &pt_unmapped, &adas_cam());

    assert_eq!(state.gear_shifter, GearShifter::Unknown);
    expected.gear_shifter = GearShifter::Unknown;
    assert_eq!(state, expected);
    assert_eq!(mapped.hud_passthrough(), unmapped.hud_passthrough());
}

#[test]
fn test_set_distance_lookup_miss() {
    let mut car_state = session(VehicleVariant::AdasCamera, false);
    let cam = adas_cam().with("ACC_HUD_ADAS", "SET_DISTANCE", 9.0);
    let state = decode(&mut car_state, &adas_pt(), &cam);

    assert_eq!(state.cruise_state.set_distance, LookupValue::Unknown(9));
}

// ============================================================================
// IccCruise
// ============================================================================

fn icc_pt() -> SignalBundle {
    SignalBundle::new()
        .with("DRIVE_STATE", "GEAR", 1.0)
        .with("WHEEL_SPEED_2", "WHEEL_SPEED_FL", 18.0)
        .with("WHEEL_SPEED_2", "WHEEL_SPEED_FR", 18.0)
        .with("WHEEL_SPEED_2", "WHEEL_SPEED_RL", 18.0)
        .with("WHEEL_SPEED_2", "WHEEL_SPEED_RR", 18.0)
        .with("SEATBELT", "DRIVER_BUCKLED", 1.0)
        .with("DOOR_STATUS", "DOOR_FR", 1.0)
        .with("BRAKE_SWITCH", "BRAKE_PRESSED", 1.0)
        .with("ICC_STATE", "ICC_ON", 1.0)
        .with("ICC_STATE", "ICC_ACTIVE", 1.0)
        .with("ICC_STATE", "SET_SPEED", 60.0)
        .with("ICC_STATE", "STANDSTILL", 1.0)
        .with("ICC_STATE", "SET_DISTANCE", 3.0)
        .with("YAW_RATE", "YAW_RATE", 90.0)
        .with("STEER_MODULE_2", "STEER_ANGLE_2", 5.0)
        // 该布局没有油门信号，即便快照中出现也不使用
        .with("PEDAL", "GAS_PEDAL", 0.9)
}

#[test]
fn test_icc_cruise_decode() {
    let mut car_state = session(VehicleVariant::IccCruise, false);
    let state = decode(&mut car_state, &icc_pt(), &SignalBundle::new());

    assert!((state.wheel_speeds.fl - 5.0).abs() < 1e-9);
    assert!((state.v_ego_raw - 5.0).abs() < 1e-9);
    assert_eq!(state.gear_shifter, GearShifter::Park);
    assert!(state.door_open);
    assert!(!state.seatbelt_unlatched);

    assert!(!state.gas_pressed);
    assert!(state.brake_pressed);
    assert_eq!(state.brake, 1.0);

    assert!((state.yaw_rate - 90.0 * DEG_TO_RAD).abs() < 1e-12);
    assert!(!state.steer_fault_temporary);

    assert!(state.cruise_state.available);
    assert!(state.cruise_state.enabled);
    assert!(state.cruise_state.standstill);
    assert!((state.cruise_state.speed_cluster - 60.0 * KPH_TO_MS).abs() < 1e-12);
    assert_eq!(state.cruise_state.set_distance.label(), Some("3"));

    assert_eq!(car_state.hud_passthrough(), HudPassthrough::default());
}

#[test]
fn test_icc_ignores_camera_bus() {
    let mut car_state = session(VehicleVariant::IccCruise, false);
    let state = decode(&mut car_state, &icc_pt(), &adas_cam());

    // 摄像头 HUD/EPS 不参与 ICC 布局
    assert_eq!(car_state.hud_passthrough(), HudPassthrough::default());
    assert!(!state.steer_fault_temporary);
    assert!((state.cruise_state.speed_cluster - 60.0 * KPH_TO_MS).abs() < 1e-12);
}

// ============================================================================
// HybridAdas
// ============================================================================

#[test]
fn test_hybrid_adas_decode() {
    let mut car_state = session(VehicleVariant::HybridAdas, false);
    let pt = SignalBundle::new()
        .with("DRIVE_STATE", "GEAR", 2.0)
        .with("WHEEL_SPEED_2", "WHEEL_SPEED_FL", 7.2)
        .with("WHEEL_SPEED_2", "WHEEL_SPEED_RL", 7.2)
        .with("SEATBELT", "DRIVER_BUCKLED", 0.0)
        .with("PEDAL", "GAS_PEDAL", 0.3)
        // 原始布局的轮速不参与
        .with("WHEEL_SPEED", "WHEELSPEED_FL", 100.0);
    let state = decode(&mut car_state, &pt, &adas_cam());

    assert!((state.v_ego_raw - 2.0).abs() < 1e-9);
    assert_eq!(state.gear_shifter, GearShifter::Reverse);
    assert!(state.seatbelt_unlatched);
    assert!(state.gas_pressed);
    assert!(state.cruise_state.available);
    assert_eq!(car_state.hud_passthrough().tsr, 42);
}

// ============================================================================
// 会话记忆
// ============================================================================

#[test]
fn test_steering_rate_uses_previous_angle() {
    let mut car_state = session(VehicleVariant::AdasCamera, false);
    decode(&mut car_state, &adas_pt(), &adas_cam());
    assert_eq!(car_state.prev_angle(), -12.5);

    let pt = adas_pt().with("STEER_MODULE_2", "STEER_ANGLE_2", -12.0);
    let state = decode(&mut car_state, &pt, &adas_cam());
    // 0.5 度 / 0.01 秒
    assert!((state.steering_rate_deg - 50.0).abs() < 1e-9);
    assert_eq!(car_state.prev_angle(), -12.0);
}

#[test]
fn test_reset_clears_memory() {
    let mut car_state = session(VehicleVariant::AdasCamera, false);
    decode(&mut car_state, &adas_pt(), &adas_cam());
    car_state.reset();
    assert_eq!(car_state.prev_angle(), 0.0);
    assert_eq!(car_state.hud_passthrough(), HudPassthrough::default());
}

#[test]
fn test_empty_bundle_is_total() {
    for variant in VehicleVariant::ALL {
        let mut car_state = session(variant, true);
        let state = decode(&mut car_state, &SignalBundle::new(), &SignalBundle::new());
        assert_eq!(state.gear_shifter, GearShifter::Unknown);
        assert!(state.standstill);
        assert!(!state.cruise_state.available);
    }
}

proptest! {
    /// 相同快照在全新会话中解码结果相同
    #[test]
    fn decode_is_deterministic(
        fl in 0.0..250.0f64,
        bl in 0.0..250.0f64,
        angle in -500.0..500.0f64,
        gear in 0i64..16,
    ) {
        let pt = adas_pt()
            .with("WHEEL_SPEED", "WHEELSPEED_FL", fl)
            .with("WHEEL_SPEED", "WHEELSPEED_BL", bl)
            .with("STEER_MODULE_2", "STEER_ANGLE_2", angle)
            .with("DRIVE_STATE", "GEAR", gear as f64);
        let cam = adas_cam();

        let a = decode(&mut session(VehicleVariant::AdasCamera, true), &pt, &cam);
        let b = decode(&mut session(VehicleVariant::AdasCamera, true), &pt, &cam);
        prop_assert_eq!(a, b);
    }

    /// 巡航可用时仪表设定车速不低于 30 km/h
    #[test]
    fn cruise_speed_cluster_has_floor(set_speed in 0.0..200.0f64) {
        let cam = adas_cam().with("ACC_HUD_ADAS", "SET_SPEED", set_speed);
        let state = decode(&mut session(VehicleVariant::AdasCamera, false), &adas_pt(), &cam);
        prop_assert!(state.cruise_state.speed_cluster >= 30.0 * KPH_TO_MS - 1e-12);
        prop_assert!(
            (state.cruise_state.speed * HUD_MULTIPLIER - state.cruise_state.speed_cluster).abs()
                < 1e-9
        );
    }
}

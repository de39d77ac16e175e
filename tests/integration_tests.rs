use hex_literal::hex;
use lorawan_activation::{
    config::{AbpProvisioning, ActivationConfig, OtaaProvisioning, Provisioning},
    crypto,
    frame::UPLINK_HEADER_SIZE,
    session::{activate, Activation, SessionState},
};

mod mock;
use mock::{APPEUI, APPKEY, APPSKEY, DEVADDR, DEVEUI, NWKSKEY, TEST_MAC};

fn abp_config() -> ActivationConfig {
    let abp = AbpProvisioning::new(NWKSKEY, APPSKEY, DEVADDR);
    ActivationConfig::new(&Provisioning::Abp(abp), None).unwrap()
}

fn otaa_config(dev_eui: Option<[u8; 8]>) -> ActivationConfig {
    let otaa = OtaaProvisioning::new(APPEUI, dev_eui, APPKEY);
    ActivationConfig::new(&Provisioning::Otaa(otaa), Some(&TEST_MAC)).unwrap()
}

fn abp_session() -> SessionState {
    match activate(&abp_config()).unwrap() {
        Activation::Session(session) => session,
        Activation::Join(_) => panic!("ABP configuration produced a join identity"),
    }
}

#[test]
fn test_abp_activation_installs_session() {
    let session = abp_session();
    assert_eq!(session.dev_addr.value(), 0x260B_9B87);
    assert_eq!(session.nwk_skey.as_bytes(), &NWKSKEY);
    assert_eq!(session.app_skey.as_bytes(), &APPSKEY);
    assert_eq!(session.fcnt_up, 0);
}

#[test]
fn test_uplink_header_carries_little_endian_dev_addr() {
    let header = abp_session().uplink_header();
    assert_eq!(header.len(), UPLINK_HEADER_SIZE);
    assert_eq!(header, hex!("40879B0B26000000"));
    assert_eq!(&header[1..5], &[0x87, 0x9B, 0x0B, 0x26]);
}

#[test]
fn test_uplink_mic_matches_known_vectors() {
    let mut session = abp_session();
    let header = session.uplink_header();
    assert_eq!(session.uplink_mic(&header), hex!("B9DED254"));

    session.increment_fcnt_up();
    let header = session.uplink_header();
    assert_eq!(header, hex!("40879B0B26000100"));
    assert_eq!(session.uplink_mic(&header), hex!("65AC814C"));
}

#[test]
fn test_mic_covers_full_frame_counter() {
    let mut session = abp_session();
    session.fcnt_up = 0x0001_0002;
    let header = session.uplink_header();
    // Only the low 16 bits are sent, the MIC still covers all 32.
    assert_eq!(header, hex!("40879B0B26000200"));
    assert_eq!(session.uplink_mic(&header), hex!("52C041B6"));
}

#[test]
fn test_session_mic_uses_provisioned_key_and_address() {
    let session = abp_session();
    let frame = hex!("40879B0B260000000148656C6C6F");
    assert_eq!(
        session.uplink_mic(&frame),
        crypto::compute_mic(&session.nwk_skey, &frame, session.dev_addr, 0)
    );
}

#[test]
fn test_frame_counter_wraps() {
    let mut session = abp_session();
    session.fcnt_up = u32::MAX;
    session.increment_fcnt_up();
    assert_eq!(session.fcnt_up, 0);
}

#[test]
fn test_otaa_activation_hands_identity_to_join() {
    let identity = match activate(&otaa_config(DEVEUI)).unwrap() {
        Activation::Join(identity) => identity,
        Activation::Session(_) => panic!("OTAA configuration installed a session"),
    };
    assert_eq!(identity.dev_eui().as_bytes(), &hex!("F0CE06D07ED5B370"));
    assert_eq!(identity.app_key().as_bytes(), &APPKEY);
    assert!(identity.app_eui().is_zero());
}

#[test]
fn test_otaa_activation_with_derived_dev_eui() {
    match activate(&otaa_config(None)).unwrap() {
        Activation::Join(identity) => {
            assert_eq!(identity.dev_eui().as_bytes(), &hex!("563412FEFFC40A24"));
            assert_eq!(identity.dev_eui().to_msb(), hex!("240AC4FFFE123456"));
        }
        Activation::Session(_) => panic!("OTAA configuration installed a session"),
    }
}

mod tests {
    use mesh_screen_composer::{Frame, FrameRegistry, RegistryError, registry_capacity};

    #[test]
    fn test_normal_scenarios() {
        let mut registry = FrameRegistry::<{ registry_capacity(16) }>::new();

        registry.rebuild_normal(0).unwrap();
        assert_eq!(registry.frames(), &[Frame::TextMessage, Frame::DebugInfo]);

        registry.rebuild_normal(1).unwrap();
        assert_eq!(registry.frames(), &[Frame::TextMessage, Frame::DebugInfo]);

        registry.rebuild_normal(4).unwrap();
        assert_eq!(
            registry.frames(),
            &[
                Frame::TextMessage,
                Frame::DebugInfo,
                Frame::NodeInfo,
                Frame::NodeInfo,
                Frame::NodeInfo,
            ]
        );
    }

    #[test]
    fn test_boot_and_bluetooth_lists() {
        let mut registry = FrameRegistry::<4>::new();
        registry.rebuild_boot().unwrap();
        assert_eq!(
            registry.frames(),
            &[Frame::BootSplash, Frame::TextMessage, Frame::DebugInfo]
        );

        registry.rebuild_bluetooth().unwrap();
        assert_eq!(registry.frames(), &[Frame::BluetoothPin]);
        assert_eq!(registry.position(Frame::BluetoothPin), Some(0));
        assert_eq!(registry.position(Frame::NodeInfo), None);
    }

    #[test]
    fn test_capacity_exceeded_keeps_previous_list() {
        let mut registry = FrameRegistry::<4>::new();
        registry.rebuild_normal(3).unwrap();
        assert_eq!(registry.len(), 4);

        let err = registry.rebuild_normal(4).unwrap_err();
        assert_eq!(
            err,
            RegistryError::CapacityExceeded {
                requested: 5,
                capacity: 4
            }
        );
        assert_eq!(registry.len(), 4);
        assert_eq!(registry.get(3), Some(Frame::NodeInfo));
    }

    #[test]
    fn test_too_small_for_boot() {
        let mut registry = FrameRegistry::<2>::new();
        assert!(registry.rebuild_boot().is_err());
        assert!(registry.is_empty());
        assert!(registry.rebuild_bluetooth().is_ok());
    }

    #[test]
    fn test_capacity_helper() {
        assert_eq!(registry_capacity(0), 2);
        assert_eq!(FrameRegistry::<{ registry_capacity(30) }>::new().capacity(), 32);
    }
}

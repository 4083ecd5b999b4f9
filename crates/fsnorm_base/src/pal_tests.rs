/* 📖 # PAL Comprehensive Test Suite

These tests run the same sequences against MockPal and RealPal so the two
implementations agree on the behavior the probe relies on.
*/

#[cfg(test)]
mod pal_trait_tests {
    use crate::error::ErrorKind;
    use crate::pal::{FilePath, MockPal, Pal, PalHandle, RealPal};
    use tempfile::TempDir;

    fn exercise_round_trip(pal: &PalHandle) {
        let dir = FilePath::from("round-trip");
        pal.create_directory(&dir).unwrap();
        pal.write_file(&dir.join("one.txt"), b"one").unwrap();
        pal.write_file(&dir.join("two.txt"), b"two").unwrap();

        let mut names = pal.list_directory(&dir).unwrap();
        names.sort();
        assert_eq!(names, vec!["one.txt".to_string(), "two.txt".to_string()]);
        assert_eq!(pal.read_file_to_bytes(&dir.join("one.txt")).unwrap(), b"one");
        assert_eq!(pal.read_file_to_bytes(&dir.join("two.txt")).unwrap(), b"two");

        pal.remove_directory_all(&dir).unwrap();
        assert!(!pal.file_exists(&dir).unwrap());
    }

    fn exercise_overwrite(pal: &PalHandle) {
        let dir = FilePath::from("overwrite");
        pal.create_directory(&dir).unwrap();
        pal.write_file(&dir.join("a.txt"), b"first").unwrap();
        pal.write_file(&dir.join("a.txt"), b"second").unwrap();

        assert_eq!(pal.list_directory(&dir).unwrap().len(), 1);
        assert_eq!(pal.read_file_to_bytes(&dir.join("a.txt")).unwrap(), b"second");
    }

    fn exercise_missing_entries(pal: &PalHandle) {
        let missing = FilePath::from("missing");
        assert!(matches!(
            pal.list_directory(&missing).unwrap_err().kind(),
            ErrorKind::ListDirectory { .. }
        ));
        assert!(matches!(
            pal.read_file_to_bytes(&missing.join("a.txt"))
                .unwrap_err()
                .kind(),
            ErrorKind::ReadFile { .. }
        ));
        assert!(matches!(
            pal.remove_directory_all(&missing).unwrap_err().kind(),
            ErrorKind::RemoveDirectory { .. }
        ));
    }

    #[test]
    fn test_mock_round_trip() {
        exercise_round_trip(&PalHandle::new(MockPal::new()));
    }

    #[test]
    fn test_real_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        exercise_round_trip(&PalHandle::new(RealPal::new(temp_dir.path().to_path_buf())));
    }

    #[test]
    fn test_mock_overwrite() {
        exercise_overwrite(&PalHandle::new(MockPal::new()));
    }

    #[test]
    fn test_real_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        exercise_overwrite(&PalHandle::new(RealPal::new(temp_dir.path().to_path_buf())));
    }

    #[test]
    fn test_mock_missing_entries() {
        exercise_missing_entries(&PalHandle::new(MockPal::new()));
    }

    #[test]
    fn test_real_missing_entries() {
        let temp_dir = TempDir::new().unwrap();
        exercise_missing_entries(&PalHandle::new(RealPal::new(temp_dir.path().to_path_buf())));
    }

    #[test]
    fn test_pal_trait_object() {
        let mock = MockPal::new();
        mock.add_file(FilePath::from("test.txt"), b"content".to_vec());

        let pal: Box<dyn Pal> = Box::new(mock);
        assert!(pal.file_exists(&FilePath::from("test.txt")).unwrap());
    }
}

#[cfg(test)]
mod error_display_tests {
    use crate::pal::{FilePath, MockPal, Pal, PalOperation};

    #[test]
    fn test_injected_error_mentions_path() {
        let mock = MockPal::new();
        mock.fail_operation(PalOperation::ListDirectory);

        let error = mock.list_directory(&FilePath::from("scratch")).unwrap_err();

        assert_eq!(
            error.to_string(),
            "could not list directory scratch: injected ListDirectory failure"
        );
    }
}

use super::opcode::{CharClass, CharRange, CharacterCompareType, OpCodeId};

#[test]
fn opcode_words_roundtrip() {
    for word in 0..=10 {
        let op = OpCodeId::from_word(word).unwrap();
        assert_eq!(op.to_word(), word);
    }
    assert_eq!(OpCodeId::from_word(11), None);
}

#[test]
fn opcode_sizes() {
    assert_eq!(OpCodeId::Compare.fixed_size(), 3);
    assert_eq!(OpCodeId::Jump.fixed_size(), 2);
    assert_eq!(OpCodeId::ForkJump.fixed_size(), 2);
    assert_eq!(OpCodeId::ForkStay.fixed_size(), 2);
    assert_eq!(OpCodeId::SaveLeftCaptureGroup.fixed_size(), 2);
    assert_eq!(OpCodeId::SaveRightNamedCaptureGroup.fixed_size(), 3);
    assert_eq!(OpCodeId::CheckBegin.fixed_size(), 1);
    assert_eq!(OpCodeId::Exit.fixed_size(), 1);
}

#[test]
fn compare_type_words() {
    assert_eq!(CharacterCompareType::from_word(4), Some(CharacterCompareType::String));
    assert_eq!(CharacterCompareType::from_word(8), None);
}

#[test]
fn char_class_names() {
    for class in CharClass::ALL {
        assert_eq!(CharClass::from_name(class.name()), Some(class));
        assert_eq!(CharClass::from_word(class.to_word()), Some(class));
    }
    assert_eq!(CharClass::from_name("word"), None);
}

#[test]
fn char_class_membership() {
    assert!(CharClass::Alnum.matches(b'z'));
    assert!(CharClass::Alnum.matches(b'7'));
    assert!(!CharClass::Alnum.matches(b'_'));
    assert!(CharClass::Space.matches(0x0b));
    assert!(CharClass::Space.matches(b'\n'));
    assert!(CharClass::Blank.matches(b'\t'));
    assert!(!CharClass::Blank.matches(b'\n'));
    assert!(CharClass::Print.matches(b' '));
    assert!(!CharClass::Graph.matches(b' '));
    assert!(CharClass::Punct.matches(b'!'));
    assert!(CharClass::Xdigit.matches(b'F'));
    assert!(!CharClass::Xdigit.matches(b'g'));
    assert!(CharClass::Cntrl.matches(0x7f));
    assert!(!CharClass::Upper.matches(0xc3));
}

#[test]
fn char_range_packing() {
    let range = CharRange::new(b'a', b'z');
    assert_eq!(range.to_word(), (u32::from(b'a') << 8) | u32::from(b'z'));
    assert_eq!(CharRange::from_word(range.to_word()), Some(range));
    assert_eq!(CharRange::from_word(0x1_0000), None);
    assert!(range.contains(b'a'));
    assert!(range.contains(b'z'));
    assert!(!range.contains(b'{'));
}

use asn1_tree::{
    decode, decode_all, decode_prefix, encode, encode_with, DecoderConfig, Element, EncoderConfig,
    Form, LengthForm, TagClass, TreeError,
};

const TAG_OCTET_STRING: u32 = 4;
const TAG_NULL: u32 = 5;
const TAG_SEQUENCE: u32 = 16;

/// Buffer of the given length with deterministic content
fn b(length: usize) -> Vec<u8> {
    (0..length).map(|i| (i % 256) as u8).collect()
}

/// Concatenate single octets and buffers into one input
fn d(parts: &[&[u8]]) -> Option<Element> {
    decode(&parts.concat()).unwrap()
}

fn octet_string(value: Vec<u8>) -> Element {
    Element::primitive(TagClass::Universal, TAG_OCTET_STRING, value)
}

fn sample_tree() -> Element {
    Element::constructed(
        TagClass::Application,
        1,
        vec![
            Element::primitive(TagClass::Universal, 2, vec![0x01]),
            Element::constructed(
                TagClass::ContextSpecific,
                0,
                vec![
                    octet_string(b(300)),
                    Element::primitive(TagClass::Universal, TAG_NULL, Vec::new()),
                    Element::constructed(TagClass::Universal, 17, Vec::new()),
                ],
            ),
            Element::primitive(TagClass::Private, 30, b"opaque".to_vec()),
            Element::constructed(
                TagClass::Universal,
                TAG_SEQUENCE,
                vec![octet_string(b(127)), octet_string(b(128))],
            ),
        ],
    )
}

#[test]
fn test_round_trip_tree() {
    let tree = sample_tree();
    let bytes = encode(&tree).unwrap();
    assert_eq!(decode(&bytes).unwrap(), Some(tree));
}

#[test]
fn test_round_trip_preserves_child_order() {
    let children: Vec<Element> = (0..20u8).map(|i| octet_string(vec![i])).collect();
    let tree = Element::constructed(TagClass::Universal, TAG_SEQUENCE, children.clone());
    let decoded = decode(&encode(&tree).unwrap()).unwrap().unwrap();
    assert_eq!(decoded.elements(), Some(&children[..]));
}

#[test]
fn test_tag_round_trip_low_numbers() {
    for class in [
        TagClass::Universal,
        TagClass::Application,
        TagClass::ContextSpecific,
        TagClass::Private,
    ] {
        for tag_code in 0..=30 {
            let element = Element::primitive(class, tag_code, vec![0xAB]);
            if class == TagClass::Universal && tag_code == 0 {
                // Identifier octet 0x00 would read back as end-of-contents
                assert_eq!(encode(&element), Err(TreeError::UnsupportedTag(0)));
                continue;
            }
            let bytes = encode(&element).unwrap();
            assert_eq!(bytes.len(), 3);
            assert_eq!(decode(&bytes).unwrap(), Some(element));
        }
    }
}

#[test]
fn test_high_tag_number_decode() {
    let element = d(&[&[0x5F, 0x32, 0x01, 0xEE]]).unwrap();
    assert_eq!(element.class(), TagClass::Application);
    assert_eq!(element.tag_code(), 50);
    assert_eq!(element.value(), Some(&[0xEE][..]));

    let element = d(&[&[0xBF, 0x82, 0x01, 0x02, 0x05, 0x00]]).unwrap();
    assert_eq!(element.class(), TagClass::ContextSpecific);
    assert_eq!(element.form(), Form::Constructed);
    assert_eq!(element.tag_code(), 257);
    assert_eq!(element.elements().unwrap().len(), 1);

    let element = d(&[&[0xDF, 0x81, 0x80, 0x00, 0x00]]).unwrap();
    assert_eq!(element.class(), TagClass::Private);
    assert_eq!(element.tag_code(), 16384);
}

#[test]
fn test_length_forms() {
    let cases: [(usize, &[u8]); 4] = [
        (0, &[0x00]),
        (127, &[0x7F]),
        (128, &[0x81, 0x80]),
        (5000, &[0x82, 0x13, 0x88]),
    ];
    for (length, length_octets) in cases {
        let bytes = encode(&octet_string(b(length))).unwrap();
        assert_eq!(&bytes[1..1 + length_octets.len()], length_octets);
        assert_eq!(bytes.len(), 1 + length_octets.len() + length);
    }
}

#[test]
fn test_indefinite_length_decode() {
    let element = d(&[&[0x30, 0x80, 0x04, 0x03, 0x00, 0x01, 0x02, 0x00, 0x00]]).unwrap();
    assert_eq!(
        element,
        Element::constructed(
            TagClass::Universal,
            TAG_SEQUENCE,
            vec![octet_string(vec![0x00, 0x01, 0x02])]
        )
    );
}

#[test]
fn test_indefinite_length_reencodes_as_definite() {
    let data = [0x30, 0x80, 0x04, 0x03, 0x00, 0x01, 0x02, 0x00, 0x00];
    let element = decode(&data).unwrap().unwrap();
    assert_eq!(encode(&element).unwrap(), vec![0x30, 0x05, 0x04, 0x03, 0x00, 0x01, 0x02]);
}

#[test]
fn test_top_level_end_of_contents() {
    assert_eq!(decode(&[0x00]).unwrap(), None);
    assert_eq!(decode(&[0x00, 0x00, 0x04, 0x01, 0x01]).unwrap(), None);
}

#[test]
fn test_trailing_bytes_ignored() {
    let data = [0x04, 0x01, 0x07, 0x04, 0x01, 0x08];
    assert_eq!(decode(&data).unwrap(), Some(octet_string(vec![0x07])));

    let (element, consumed) = decode_prefix(&data, &DecoderConfig::default()).unwrap();
    assert_eq!(element, Some(octet_string(vec![0x07])));
    assert_eq!(consumed, 3);

    let all = decode_all(&data, &DecoderConfig::default()).unwrap();
    assert_eq!(all, vec![octet_string(vec![0x07]), octet_string(vec![0x08])]);
}

#[test]
fn test_rejections() {
    let high_tag = Element::primitive(TagClass::ContextSpecific, 31, vec![0x01]);
    assert_eq!(encode(&high_tag), Err(TreeError::UnsupportedTag(31)));

    let config = EncoderConfig::new().with_length_form(LengthForm::Indefinite);
    let sequence = Element::constructed(TagClass::Universal, TAG_SEQUENCE, Vec::new());
    assert!(matches!(
        encode_with(&sequence, &config),
        Err(TreeError::UnsupportedOperation(_))
    ));
}

#[test]
fn test_malformed_inputs() {
    let inputs: [&[u8]; 6] = [
        &[],
        &[0x1F],
        &[0x04, 0x82, 0x13],
        &[0x04, 0x05, 0x00, 0x01],
        &[0x30, 0x80, 0x04, 0x01, 0x00],
        &[0x30, 0x80, 0x30, 0x80, 0x00, 0x00],
    ];
    for input in inputs {
        assert!(
            matches!(decode(input), Err(TreeError::MalformedInput(_))),
            "input {:02X?} should be rejected",
            input
        );
    }
}

#[test]
fn test_scenario_octet_string() {
    let element = d(&[&[0x04, 0x03, 0x00, 0x01, 0x02]]).unwrap();
    assert_eq!(element.class(), TagClass::Universal);
    assert_eq!(element.form(), Form::Primitive);
    assert_eq!(element.tag_code(), TAG_OCTET_STRING);
    assert_eq!(element.value(), Some(&[0x00, 0x01, 0x02][..]));
}

#[test]
fn test_null_element_with_length_0() {
    assert_eq!(
        d(&[&[0x05, 0x00]]),
        Some(Element::primitive(TagClass::Universal, TAG_NULL, Vec::new()))
    );
}

#[test]
fn test_primitive_with_short_length_127() {
    assert_eq!(d(&[&[0x04, 127], &b(127)]), Some(octet_string(b(127))));
}

#[test]
fn test_primitive_with_long_length() {
    let length = 5000usize;
    let header = [0x04, 0x80 | 2, (length >> 8) as u8, (length & 0xFF) as u8];
    assert_eq!(d(&[&header, &b(length)]), Some(octet_string(b(length))));
}

#[test]
fn test_indefinite_length_with_single_trailing_marker_octet() {
    assert_eq!(
        d(&[&[0x20 | TAG_SEQUENCE as u8, 0x80, 0x04, 3], &b(3), &[0x00]]),
        Some(Element::constructed(
            TagClass::Universal,
            TAG_SEQUENCE,
            vec![octet_string(b(3))]
        ))
    );
}

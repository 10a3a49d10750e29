use ip_filter::{run, write_report, Address, AddressPool, Error, MalformedLines, ParseError};

fn report(input: &str) -> Vec<String> {
    let pool = AddressPool::from_reader(input.as_bytes(), MalformedLines::Abort).unwrap();
    let mut out = Vec::new();
    write_report(&pool, &mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn four_record_example() {
    let lines = report("1.231.69.33\tX\n46.70.225.39\tY\n46.70.147.26\tZ\n186.204.34.46\tW\n");
    assert_eq!(
        vec![
            // all
            "186.204.34.46",
            "46.70.225.39",
            "46.70.147.26",
            "1.231.69.33",
            // 1.*
            "1.231.69.33",
            // 46.70.*
            "46.70.225.39",
            "46.70.147.26",
            // any 46
            "186.204.34.46",
            "46.70.225.39",
            "46.70.147.26",
        ],
        lines
    );
}

const ANY_46: &[&str] = &[
    "186.204.34.46",
    "186.46.222.194",
    "185.46.87.231",
    "185.46.86.132",
    "185.46.86.131",
    "185.46.86.131",
    "185.46.86.22",
    "185.46.85.204",
    "185.46.85.78",
    "68.46.218.208",
    "46.251.197.23",
    "46.223.254.56",
    "46.223.254.56",
    "46.182.19.219",
    "46.161.63.66",
    "46.161.61.51",
    "46.161.60.92",
    "46.161.60.35",
    "46.161.58.202",
    "46.161.56.241",
    "46.161.56.203",
    "46.161.56.174",
    "46.161.56.106",
    "46.161.56.106",
    "46.101.163.119",
    "46.101.127.145",
    "46.70.225.39",
    "46.70.147.26",
    "46.70.113.73",
    "46.70.29.76",
    "46.55.46.98",
    "46.49.43.85",
    "39.46.86.85",
    "5.189.203.46",
];

const FIRST_1: &[&str] = &[
    "1.231.69.33",
    "1.87.203.225",
    "1.70.44.170",
    "1.29.168.152",
    "1.1.234.8",
];

const PREFIX_46_70: &[&str] = &["46.70.225.39", "46.70.147.26", "46.70.113.73", "46.70.29.76"];

const OTHERS: &[&str] = &["222.173.235.246", "222.130.177.64", "222.82.198.61"];

#[test]
fn sample_log() {
    // Feed the records in a scrambled order, with extra fields as in the logs.
    let mut records: Vec<&str> = ANY_46.iter().chain(FIRST_1).chain(OTHERS).cloned().collect();
    records.reverse();
    records.rotate_left(17);
    let input: String = records
        .iter()
        .enumerate()
        .map(|(i, ip)| format!("{}\t{}\t{}\n", ip, i * 7, i % 3))
        .collect();

    let lines = report(&input);
    let total = records.len();
    assert_eq!(total + FIRST_1.len() + PREFIX_46_70.len() + ANY_46.len(), lines.len());

    let (all, rest) = lines.split_at(total);
    let (first, rest) = rest.split_at(FIRST_1.len());
    let (prefix, any) = rest.split_at(PREFIX_46_70.len());

    assert_eq!(OTHERS, &all[..3]);
    assert_eq!(&["1.70.44.170", "1.29.168.152", "1.1.234.8"], &all[total - 3..]);
    let mut sorted: Vec<Address> = all.iter().map(|s| s.parse().unwrap()).collect();
    sorted.sort_by(|a, b| b.cmp(a));
    let resorted: Vec<String> = sorted.iter().map(Address::to_string).collect();
    assert_eq!(resorted, all);

    assert_eq!(FIRST_1, first);
    assert_eq!(PREFIX_46_70, prefix);
    assert_eq!(ANY_46, any);
}

#[test]
fn malformed_record_stops_the_run() {
    let input = "1.2.3.4\ta\n999.1.1.1\tb\n46.70.0.1\tc\n";
    match AddressPool::from_reader(input.as_bytes(), MalformedLines::Abort) {
        Err(e @ Error::Malformed { .. }) => {
            assert_eq!("line 2: IPv4 octet out of range: 999", e.to_string());
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn malformed_records_can_be_skipped() {
    let input = "1.2.3.4\ta\n999.1.1.1\tb\nfoo\n46.70.0.1\tc\n";
    let pool = AddressPool::from_reader(input.as_bytes(), MalformedLines::Skip).unwrap();
    assert_eq!(2, pool.len());
    assert_eq!(1, pool.count(Address::new(1, 2, 3, 4).key()));
    assert_eq!(1, pool.count(Address::new(46, 70, 0, 1).key()));
    assert_eq!(0, pool.range_by_prefix1(231).count());
}

#[test]
fn failed_run_writes_nothing() {
    let input = "46.70.1.1\ta\n1.2.3\tb\n";
    let mut out = Vec::new();
    match run(input.as_bytes(), &mut out) {
        Err(Error::Malformed {
            line: 2,
            source: ParseError::OctetCount { .. },
        }) => {}
        other => panic!("unexpected {:?}", other),
    }
    assert!(out.is_empty());
}

#[test]
fn run_writes_all_sections() {
    let mut out = Vec::new();
    run("46.70.1.1\ta\n".as_bytes(), &mut out).unwrap();
    assert_eq!(
        "46.70.1.1\n46.70.1.1\n46.70.1.1\n",
        String::from_utf8(out).unwrap()
    );
}

use cidian::{Dictionary, DictionaryConfig, FileWordSource, MemoryWordSource};

fn main() {
    let builtin = MemoryWordSource::new(
        "终端\tn\n保修期\tn\n热线电话\tn\n服务\tn v\n# 注释行\n",
    );

    let mut config = DictionaryConfig::default();
    config.ambiguity = true;

    let user_dict = std::env::args().nth(1);
    let dict = match user_dict {
        Some(path) => {
            let user = FileWordSource::new(path);
            Dictionary::from_sources(&[&builtin, &user], config)
        }
        None => Dictionary::from_sources(&[&builtin], config),
    };

    println!(
        "{} words, bounds {:?}, index key length {}",
        dict.len(),
        dict.bounds(),
        dict.index_key_len()
    );

    for prefix in ["终端", "保修", "热线", "服务"] {
        println!("{} -> {:?}", prefix, dict.candidate_lengths(prefix));
    }

    // An ad-hoc add is visible immediately but unindexed until a rebuild.
    dict.add_word("终端机", &["n"]);
    println!(
        "after add: contains={} stale={} candidates={:?}",
        dict.contains("终端机"),
        dict.is_stale(),
        dict.candidate_lengths("终端")
    );

    dict.rebuild_index();
    println!(
        "after rebuild: stale={} candidates={:?}",
        dict.is_stale(),
        dict.candidate_lengths("终端")
    );

    let mut out = Vec::new();
    dict.save(&mut out).expect("write to memory cannot fail");
    print!("{}", String::from_utf8(out).expect("dictionary is UTF-8"));
}

//! ASCII art for `fastfetch`, one per display preset.

use ninesh_types::Distro;

const ARCH: &[&str] = &[
    r"                   -`                 ",
    r"                  .o+`                ",
    r"                 `ooo/                ",
    r"                `+oooo:               ",
    r"               `+oooooo:              ",
    r"               -+oooooo+:             ",
    r"             `/:-:++oooo+:            ",
    r"            `/++++/+++++++:           ",
    r"           `/++++++++++++++:          ",
    r"          `/+++ooooooooooooo/`        ",
    r"         ./ooosssso++osssssso+`       ",
    r"        .oossssso-````/ossssss+`      ",
    r"       -osssssso.      :ssssssso.     ",
    r"      :osssssss/        osssso+++.    ",
    r"     /ossssssss/        +ssssooo/-    ",
    r"   `/ossssso+/:-        -:/+osssso+-  ",
    r"  `+sso+:-`                 `.-/+oso: ",
    r" `++:.                           `-/+/",
    r" .`                                 `/ ",
];

const DEBIAN: &[&str] = &[
    r#"       _,met$$$$$gg.          "#,
    r#"    ,g$$$$$$$$$$$$$$$P.       "#,
    r#"  ,g$$P"     """Y$$.".        "#,
    r#" ,$$P'              `$$$.     "#,
    r#"',$$P       ,ggs.     `$$b:  "#,
    r#"`d$$'     ,$P"'   .    $$$   "#,
    r#" $$P      d$'     ,    $$P   "#,
    r#" $$:      $$.   -    ,d$$'   "#,
    r#" $$;      Y$b._   _,d$P'    "#,
    r#" Y$$.    `.`"Y$$$$P"'        "#,
    r#" `$$b      "-.__              "#,
    r#"  `Y$$                        "#,
    r#"   `Y$$.                      "#,
    r#"     `$$b.                    "#,
    r#"       `Y$$b.                 "#,
    r#"          `"Y$b._             "#,
    r#"              `""""           "#,
];

const UBUNTU: &[&str] = &[
    r"             .-/+oossssoo+/-.           ",
    r"         `:+ssssssssssssssssss+:`       ",
    r"       -+ssssssssssssssssssyyssss+-     ",
    r"     .ossssssssssssssssss  dMMMNy sso.  ",
    r"   /sssssssssss hdmmNNmmyNMMMMh  ssss\  ",
    r"  +sssssssss hm yd MMMMMMMMMMMNdd ysss+ ",
    r" /ssssssss hNMMM yNMMMMMMMMMMmmdd yssss\",
    r".ssssssss dMMMNh  NMMMMhssssoss shmmssss.",
    r"+ssss hNMMM yh NMMM  ssssssssss mNhssss+",
    r"ossyNMMMNy    NMMMo  ssssssssss NMmosso",
    r"ossyNMMMNy    NMMMo  ssssssssss NMmosso",
    r"+ssss hNMMM yh NMMM  ssssssssss mNhssss+",
    r".ssssssss dMMMNh  NMMMMhssssoss shmmssss.",
    r" \ssssssss hNMMM yNMMMMMMMMMMmmdd yssss/",
    r"  +sssssssss hm yd MMMMMMMMMMMNdd ysss+ ",
    r"   \sssssssssss hdmmNNmmyNMMMMh  ssss/  ",
    r"     .ossssssssssssssssss  dMMMNy sso.  ",
    r"       -+sssssssssssssssssyyyssss+-     ",
    r"         `:+ssssssssssssssssss+:`       ",
    r"             .-/+oossssoo+/-.           ",
];

const FEDORA: &[&str] = &[
    r"          /:-------------:\          ",
    r"       :-------------------::        ",
    r"     :-----------/shhOHbmp---:\      ",
    r"   /-----------omMMMNNNMMD  ---:     ",
    r"  :-----------sMMMMNMNMP.    ---:    ",
    r" :-----------:MMMdP-------    ---\   ",
    r",------------:MMMd--------    ---:   ",
    r":------------:MMMd-------    .---:   ",
    r":----    oNMMMMMMMMMNho     .----:   ",
    r":--     .+shhhMMMmhhy++   .------/   ",
    r":-    -------:MMMd--------------:    ",
    r":-   --------/MMMd-------------;     ",
    r":-    ------/hMMMy------------:      ",
    r":-- :dMNdhhdNMMNo------------;       ",
    r":---:sdNMMMMNds:------------:        ",
    r":------:://:-------------::          ",
    r":---------------------://            ",
];

const GENTOO: &[&str] = &[
    r"         -/oyddmdhs+:.                ",
    r"     -odNMMMMMMMMNNmhy+-`             ",
    r"   -yNMMMMMMMMMMMNNNmmdhy+-           ",
    r" `omMMMMMMMMMMMMNmdmmmmddhhy/`        ",
    r" omMMMMMMMMMMMNhhyyyohmdddhhhdo`      ",
    r".ydMMMMMMMMMMdoooyhshmdc  ``:```      ",
    r" ydMMMMMMMMMd  ooo`` hy  `````        ",
    r" .FMMMMMMMMM-  oyhy:`  `         +    ",
    r"  :NMMMMMMMM-      -oh:        ohy    ",
    r"   oNMMMMMMMMo          `:ohmMMMMMd   ",
    r"    yMMMMMMMMMs       -oyhdmMMMMMMd   ",
    r"     -dMMMMMMMMM+     `+mMMMMMMMMo    ",
    r"      -dMMMMMMMMN:       .mMMMMMo     ",
    r"       `sNMMMMMMMNo:      `yMMMo      ",
    r"         :hMMMMMMMNs-      .NMo       ",
    r"            -/oyyhhyo/`    .dM:       ",
    r"                          :yy:        ",
];

/// The logo for a preset, one string per row.
pub fn logo(distro: Distro) -> &'static [&'static str] {
    match distro {
        Distro::Arch => ARCH,
        Distro::Debian => DEBIAN,
        Distro::Ubuntu => UBUNTU,
        Distro::Fedora => FEDORA,
        Distro::Gentoo => GENTOO,
    }
}

/// Width of the widest row, in characters.
pub fn width(logo: &[&str]) -> usize {
    logo.iter().map(|row| row.chars().count()).max().unwrap_or(0)
}

//! DFHRESP and DFHVALUE condition/value tables.
//!
//! The names are substituted by the CICS preprocessor with `=F'number'`
//! constants; unknown names surface as DFH7218I cards.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

#[rustfmt::skip]
const DFHRESP_ENTRIES: &[(&str, i32)] = &[
    ("NORMAL", 0),
    ("ERROR", 1),
    ("RDATT", 2),
    ("WRBRK", 3),
    ("EOF", 4),
    ("EODS", 5),
    ("EOC", 6),
    ("INBFMH", 7),
    ("ENDINPT", 8),
    ("NONVAL", 9),
    ("NOSTART", 10),
    ("TERMIDERR", 11),
    ("DSIDERR", 12),
    ("FILENOTFOUND", 12),
    ("NOTFND", 13),
    ("DUPREC", 14),
    ("DUPKEY", 15),
    ("INVREQ", 16),
    ("IOERR", 17),
    ("NOSPACE", 18),
    ("NOTOPEN", 19),
    ("ENDFILE", 20),
    ("ILLOGIC", 21),
    ("LENGERR", 22),
    ("QZERO", 23),
    ("SIGNAL", 24),
    ("QBUSY", 25),
    ("ITEMERR", 26),
    ("PGMIDERR", 27),
    ("TRANSIDERR", 28),
    ("ENDDATA", 29),
    ("INVTSREQ", 30),
    ("EXPIRED", 31),
    ("RETPAGE", 32),
    ("RTEFAIL", 33),
    ("RTESOME", 34),
    ("TSIOERR", 35),
    ("MAPFAIL", 36),
    ("INVERRTERM", 37),
    ("INVMPSZ", 38),
    ("IGREQID", 39),
    ("OVERFLOW", 40),
    ("INVLDC", 41),
    ("NOSTG", 42),
    ("JIDERR", 43),
    ("QIDERR", 44),
    ("NOJBUFSP", 45),
    ("DSSTAT", 46),
    ("SELNERR", 47),
    ("FUNCERR", 48),
    ("UNEXPIN", 49),
    ("NOPASSBKRD", 50),
    ("NOPASSBKWR", 51),
    ("SEGIDERR", 52),
    ("SYSIDERR", 53),
    ("ISCINVREQ", 54),
    ("ENQBUSY", 55),
    ("ENVDEFERR", 56),
    ("IGREQCD", 57),
    ("SESSIONERR", 58),
    ("SYSBUSY", 59),
    ("SESSBUSY", 60),
    ("NOTALLOC", 61),
    ("CBIDERR", 62),
    ("INVEXITREQ", 63),
    ("INVPARTNSET", 64),
    ("INVPARTN", 65),
    ("PARTNFAIL", 66),
    ("USERIDERR", 69),
    ("NOTAUTH", 70),
    ("VOLIDERR", 71),
    ("SUPPRESSED", 72),
    ("RESIDERR", 75),
    ("NOSPOOL", 80),
    ("TERMERR", 81),
    ("ROLLEDBACK", 82),
    ("END", 83),
    ("DISABLED", 84),
    ("ALLOCERR", 85),
    ("STRELERR", 86),
    ("OPENERR", 87),
    ("SPOLBUSY", 88),
    ("SPOLERR", 89),
    ("NODEIDERR", 90),
    ("TASKIDERR", 91),
    ("TCIDERR", 92),
    ("DSNNOTFOUND", 93),
    ("LOADING", 94),
    ("MODELIDERR", 95),
    ("OUTDESCRERR", 96),
    ("PARTNERIDERR", 97),
    ("PROFILEIDERR", 98),
    ("NETNAMEIDERR", 99),
    ("LOCKED", 100),
    ("RECORDBUSY", 101),
    ("UOWNOTFOUND", 102),
    ("UOWLNOTFOUND", 103),
    ("LINKABEND", 104),
    ("CHANGED", 105),
    ("PROCESSBUSY", 106),
    ("ACTIVITYBUSY", 107),
    ("PROCESSERR", 108),
    ("ACTIVITYERR", 109),
    ("CONTAINERERR", 110),
    ("EVENTERR", 111),
    ("TOKENERR", 112),
    ("NOTFINISHED", 113),
    ("POOLERR", 114),
    ("TIMERERR", 115),
    ("SYMBOLERR", 116),
    ("TEMPLATERR", 117),
    ("NOTSUPERUSER", 118),
    ("CSDERR", 119),
    ("DUPRES", 120),
    ("RESUNAVAIL", 121),
    ("CHANNELERR", 122),
    ("CCSIDERR", 123),
    ("TIMEDOUT", 124),
    ("CODEPAGEERR", 125),
    ("INCOMPLETE", 126),
    ("APPNOTFOUND", 127),
    ("BUSY", 128),
];

#[rustfmt::skip]
const DFHVALUE_ENTRIES: &[(&str, i32)] = &[
    ("ACQUIRED", 69),
    ("ACQUIRING", 71),
    ("ACTIVE", 181),
    ("ADD", 291),
    ("ADDABLE", 41),
    ("ADVANCE", 265),
    ("ALLCONN", 169),
    ("ALLOCATED", 81),
    ("ALLQUERY", 431),
    ("ALTERABLE", 52),
    ("ALTERNATE", 197),
    ("ALTPRTCOPY", 446),
    ("ANY", 158),
    ("APLKYBD", 391),
    ("APLTEXT", 393),
    ("APPC", 124),
    ("APPCPARALLEL", 374),
    ("APPCSINGLE", 373),
    ("ASATCL", 224),
    ("ASCII7", 616),
    ("ASCII8", 617),
    ("ASSEMBLER", 150),
    ("ATI", 75),
    ("ATTENTION", 524),
    ("AUDALARM", 395),
    ("AUTOACTIVE", 630),
    ("AUTOARCH", 262),
    ("AUTOCONN", 170),
    ("AUTOINACTIVE", 631),
    ("AUTOPAGEABLE", 80),
    ("AUXILIARY", 247),
    ("AUXPAUSE", 313),
    ("AUXSTART", 312),
    ("AUXSTOP", 314),
    ("BACKOUT", 192),
    ("BACKTRANS", 397),
    ("BASE", 10),
    ("BATCHLU", 191),
    ("BDAM", 2),
    ("BELOW", 159),
    ("BGAM", 63),
    ("BIPROG", 160),
    ("BISYNCH", 128),
    ("BIT", 1600),
    ("BLK", 47),
    ("BLOCKED", 16),
    ("BROWSABLE", 39),
    ("BSAM", 61),
    ("BTAM_ES", 62),
    ("BUSY", 612),
    ("C", 149),
    ("CANCELLED", 624),
    ("CDRDLPRT", 24),
    ("CEDF", 370),
    ("CICSDATAKEY", 379),
    ("CICSEXECKEY", 381),
    ("CICSSECURITY", 195),
    ("CICSTABLE", 101),
    ("CHAR", 1601),
    ("CKOPEN", 1055),
    ("CLEAR", 640),
    ("CLOSED", 19),
    ("CLOSEFAILED", 349),
    ("CLOSELEAVE", 261),
    ("CLOSEREQUEST", 22),
    ("CLOSING", 21),
    ("CMDPROT", 673),
    ("CMDSECEXT", 207),
    ("CMDSECNO", 205),
    ("CMDSECYES", 206),
    ("COBOL", 151),
    ("COBOLII", 375),
    ("COBOLIT", 1507),
    ("COLDACQ", 72),
    ("COLDQUERY", 433),
    ("COLDSTART", 266),
    ("COLOR", 399),
    ("COMMIT", 208),
    ("CONFFREE", 82),
    ("CONFRECEIVE", 83),
    ("CONFSEND", 84),
    ("CONSOLE", 66),
    ("CONTNLU", 189),
    ("CONTROLSHUT", 623),
    ("COPY", 401),
    ("CPP", 624),
    ("CREATE", 67),
    ("CTLGALL", 632),
    ("CTLGMODIFY", 633),
    ("CTLGNONE", 634),
    ("CTRLABLE", 56),
    ("CURRENT", 260),
    ("DB2", 623),
    ("DEC", 46),
    ("DEFAULT", 198),
    ("DELAY", 637),
    ("DELETABLE", 43),
    ("DEST", 235),
    ("DISABLED", 24),
    ("DISABLING", 25),
    ("DISCREQ", 444),
    ("DISK1", 252),
    ("DISK2", 253),
    ("DISK2PAUSE", 254),
    ("DISPATCHABLE", 228),
    ("DPLSUBSET", 383),
    ("DS3270", 615),
    ("DUALCASE", 403),
    ("DYNAMIC", 178),
    ("EMERGENCY", 268),
    ("EMPTY", 210),
    ("EMPTYREQ", 31),
    ("ENABLED", 23),
    ("ESDS", 5),
    ("EVENT", 334),
    ("EXCEPT", 332),
    ("EXCTL", 48),
    ("EXITTRACE", 362),
    ("EXTENDEDDS", 405),
    ("EXTRA", 221),
    ("EXTSECURITY", 194),
    ("FAILEDBKOUT", 357),
    ("FAILINGBKOUT", 358),
    ("FCLOSE", 273),
    ("FINALQUIESCE", 183),
    ("FINPUT", 270),
    ("FIRSTINIT", 625),
    ("FIRSTQUIESCE", 182),
    ("FIXED", 12),
    ("FMH", 502),
    ("FMHPARM", 385),
    ("FOPEN", 272),
    ("FORCE", 342),
    ("FORCECLOSE", 351),
    ("FORCECLOSING", 353),
    ("FORCEPURGE", 237),
    ("FORMFEED", 407),
    ("FOUTPUT", 271),
    ("FREE", 85),
    ("FREEING", 94),
    ("FULL", 212),
    ("FULLAPI", 384),
    ("FWDRECOVABLE", 354),
    ("GENERIC", 651),
    ("GOINGOUT", 172),
    ("GFTSTART", 317),
    ("GFTSTOP", 318),
    ("HARDCOPY", 32),
    ("HEX", 45),
    ("HFORM", 409),
    ("HILIGHT", 413),
    ("HOLD", 163),
    ("IBMCOBOL", 375),
    ("IGNORE", 1),
    ("IMMCLOSE", 350),
    ("IMMCLOSING", 352),
    ("INACTIVE", 378),
    ("INDIRECT", 122),
    ("INDOUBT", 620),
    ("INFLIGHT", 621),
    ("INITCOMPLETE", 628),
    ("INPUT", 226),
    ("INSERVICE", 73),
    ("INSTART", 1502),
    ("INSTOP", 1503),
    ("INTACTLU", 190),
    ("INTERNAL", 1058),
    ("INTRA", 222),
    ("INTSTART", 310),
    ("INTSTOP", 311),
    ("INVALID", 359),
    ("IPIC", 805),
    ("IRC", 121),
    ("ISCMMCONV", 209),
    ("ISOLATE", 658),
    ("JAVA", 625),
    ("KATAKANA", 415),
    ("KEYED", 8),
    ("KSDS", 6),
    ("LE370", 377),
    ("LIGHTPEN", 417),
    ("LOG", 54),
    ("LOGICAL", 216),
    ("LPA", 165),
    ("LU61", 125),
    ("LUCMODGRP", 210),
    ("LUCSESS", 211),
    ("LUTYPE4", 193),
    ("LUTYPE6", 192),
    ("MAGTAPE", 20),
    ("MAIN", 248),
    ("MAP", 155),
    ("MAPSET", 155),
    ("MCHCTL", 241),
    ("MODEL", 370),
    ("MSRCONTROL", 419),
    ("NEW", 28),
    ("NEWCOPY", 167),
    ("NOALTPRTCOPY", 447),
    ("NOAPLKYBD", 392),
    ("NOAPLTEXT", 394),
    ("NOATI", 76),
    ("NOAUDALARM", 396),
    ("NOAUTOARCH", 263),
    ("NOBACKTRANS", 398),
    ("NOCEDF", 371),
    ("NOCLEAR", 641),
    ("NOCMDPROT", 674),
    ("NOCOLOR", 400),
    ("NOCOPY", 402),
    ("NOCREATE", 68),
    ("NOCTL", 223),
    ("NODISCREQ", 445),
    ("NODUALCASE", 404),
    ("NOEMPTYREQ", 32),
    ("NOEVENT", 335),
    ("NOEXCEPT", 333),
    ("NOEXCTL", 49),
    ("NOEXITTRACE", 363),
    ("NOEXTENDEDDS", 406),
    ("NOFMH", 503),
    ("NOFMHPARM", 386),
    ("NOFORMFEED", 408),
    ("NOHFORM", 410),
    ("NOHILIGHT", 414),
    ("NOHOLD", 164),
    ("NOISOLATE", 657),
    ("NOKATAKANA", 416),
    ("NOLIGHTPEN", 418),
    ("NOLOG", 55),
    ("NOMSRCONTROL", 420),
    ("NONAUTOCONN", 171),
    ("NOOBFORMAT", 422),
    ("NOOBOPERID", 388),
    ("NOOUTLINE", 424),
    ("NOPARTITIONS", 426),
    ("NOPERF", 331),
    ("NOPRESETSEC", 243),
    ("NOPRINTADAPT", 428),
    ("NOPROGSYMBOL", 430),
    ("NOPRTCOPY", 449),
    ("NOQUERY", 432),
    ("NOREENTPROT", 681),
    ("NORELREQ", 443),
    ("NORMALBKOUT", 356),
    ("NOSHUTDOWN", 289),
    ("NOSOSI", 435),
    ("NOSWITCH", 285),
    ("NOSYSDUMP", 185),
    ("NOTADDABLE", 42),
    ("NOTALTERABLE", 53),
    ("NOTAPPLIC", 1),
    ("NOTCTRLABLE", 57),
    ("NOTEXTKYBD", 437),
    ("NOTEXTPRINT", 439),
    ("NOTBROWSABLE", 40),
    ("NOTBUSY", 613),
    ("NOTDELETABLE", 44),
    ("NOTEMPTY", 211),
    ("NOTERMINAL", 214),
    ("NOTFWDRCVBLE", 361),
    ("NOTKEYED", 9),
    ("NOTLPA", 166),
    ("NOTPENDING", 127),
    ("NOTPURGEABLE", 161),
    ("NOTRANDUMP", 187),
    ("NOTREADABLE", 36),
    ("NOTREADY", 259),
    ("NOTRECOVABLE", 30),
    ("NOTREQUIRED", 667),
    ("NOTSOS", 669),
    ("NOTTABLE", 100),
    ("NOTINIT", 376),
    ("NOTTI", 78),
    ("NOTUPDATABLE", 38),
    ("NOUCTRAN", 451),
    ("NOVALIDATION", 441),
    ("NOVFORM", 412),
    ("NOWAIT", 341),
    ("NOZCPTRACE", 365),
    ("OBFORMAT", 421),
    ("OBOPERID", 387),
    ("OBTAINING", 96),
    ("OFF", 200),
    ("OK", 274),
    ("OLD", 26),
    ("OLDCOPY", 162),
    ("ON", 201),
    ("OPEN", 18),
    ("OPENAPI", 1053),
    ("OPENING", 20),
    ("OPENINPUT", 256),
    ("OPENOUTPUT", 257),
    ("OUTLINE", 423),
    ("OUTPUT", 227),
    ("OUTSERVICE", 74),
    ("PAGEABLE", 79),
    ("PARTITIONS", 425),
    ("PARTITIONSET", 156),
    ("PATH", 11),
    ("PENDFREE", 86),
    ("PENDING", 126),
    ("PENDRECEIVE", 87),
    ("PERF", 330),
    ("PHASEIN", 168),
    ("PHYSICAL", 215),
    ("PL1", 152),
    ("POST", 636),
    ("PRESETSEC", 242),
    ("PRIMARY", 110),
    ("PRINTADAPT", 427),
    ("PRIVATE", 174),
    ("PROGRAM", 154),
    ("PROGSYMBOL", 429),
    ("PRTCOPY", 448),
    ("PURGE", 236),
    ("PURGEABLE", 160),
    ("QR", 1057),
    ("READABLE", 35),
    ("READBACK", 209),
    ("READONLY", 275),
    ("READY", 258),
    ("RECEIVE", 88),
    ("RECOVERABLE", 29),
    ("REENTPROT", 680),
    ("RELEASED", 70),
    ("RELEASING", 549),
    ("RELREQ", 442),
    ("REMOTE", 4),
    ("REMOVE", 276),
    ("REQUIRED", 666),
    ("RESSECEXT", 204),
    ("RESSECNO", 202),
    ("RESSECYES", 203),
    ("RESSYS", 208),
    ("REVERTED", 264),
    ("RFC3339", 647),
    ("ROLLBACK", 89),
    ("RPC", 1500),
    ("RRDS", 7),
    ("RUNNING", 229),
    ("SCS", 614),
    ("SDLC", 176),
    ("SECONDINIT", 626),
    ("SEND", 90),
    ("SEQDISK", 18),
    ("SESSION", 372),
    ("SFS", 3),
    ("SHARE", 27),
    ("SHARED", 173),
    ("SHUTDISABLED", 645),
    ("SHUTENABLED", 644),
    ("SHUTDOWN", 288),
    ("SIGNEDOFF", 245),
    ("SIGNEDON", 244),
    ("SINGLEOFF", 324),
    ("SINGLEON", 323),
    ("SMF", 255),
    ("SOS", 668),
    ("SOSABOVE", 683),
    ("SOSBELOW", 682),
    ("SOSI", 434),
    ("SPECIFIC", 652),
    ("SPECTRACE", 177),
    ("SPRSTRACE", 175),
    ("SQL", 623),
    ("STANTRACE", 176),
    ("START", 635),
    ("STARTED", 609),
    ("STARTUP", 180),
    ("STATIC", 179),
    ("STOPPED", 610),
    ("SURROGATE", 371),
    ("SUSPENDED", 231),
    ("SWITCH", 188),
    ("SWITCHALL", 287),
    ("SWITCHING", 225),
    ("SWITCHNEXT", 286),
    ("SYNCFREE", 91),
    ("SYNCRECEIVE", 92),
    ("SYNCSEND", 93),
    ("SYSDUMP", 184),
    ("SYSTEM", 643),
    ("SYSTEMOFF", 320),
    ("SYSTEMON", 319),
    ("SYSTEM3", 161),
    ("SYSTEM7", 2),
    ("SYS370", 164),
    ("SYS7BSCA", 166),
    ("TAKEOVER", 111),
    ("TAPE1", 250),
    ("TAPE2", 251),
    ("TASK", 233),
    ("TCAM", 64),
    ("TCAMSNA", 65),
    ("TCEXITALL", 366),
    ("TCEXITALLOFF", 369),
    ("TCEXITNONE", 368),
    ("TCEXITSYSTEM", 367),
    ("TCONSOLE", 8),
    ("TCPIP", 802),
    ("TELETYPE", 34),
    ("TERM", 234),
    ("TERMINAL", 213),
    ("TERMSTATUS", 606),
    ("TEXTKYBD", 436),
    ("TEXTPRINT", 438),
    ("THIRDINIT", 627),
    ("THREADSAFE", 1051),
    ("TRANDUMP", 186),
    ("TRANIDONLY", 452),
    ("TTCAM", 80),
    ("TTI", 77),
    ("TWX33_35", 33),
    ("T1050", 36),
    ("T1053", 74),
    ("T2260L", 65),
    ("T2260R", 72),
    ("T2265", 76),
    ("T2740", 40),
    ("T2741BCD", 43),
    ("T2741COR", 42),
    ("T2772", 130),
    ("T2780", 132),
    ("T2980", 134),
    ("T3275R", 146),
    ("T3277L", 153),
    ("T3277R", 145),
    ("T3284L", 155),
    ("T3284R", 147),
    ("T3286L", 156),
    ("T3286R", 148),
    ("T3600BI", 138),
    ("T3601", 177),
    ("T3614", 178),
    ("T3650ATT", 186),
    ("T3650HOST", 185),
    ("T3650PIPE", 184),
    ("T3650USER", 187),
    ("T3735", 136),
    ("T3740", 137),
    ("T3780", 133),
    ("T3790", 180),
    ("T3790SCSP", 182),
    ("T3790UP", 181),
    ("T7770", 1),
    ("UCTRAN", 450),
    ("UKOPEN", 1056),
    ("UNBLOCKED", 17),
    ("UNDEFINED", 14),
    ("UNDETERMINED", 355),
    ("UNENABLED", 33),
    ("UNENABLING", 34),
    ("UPDATABLE", 37),
    ("USER", 642),
    ("USERDATAKEY", 380),
    ("USEREXECKEY", 382),
    ("USEROFF", 322),
    ("USERON", 321),
    ("USERTABLE", 102),
    ("VALID", 360),
    ("VALIDATION", 440),
    ("VARIABLE", 13),
    ("VFORM", 411),
    ("VIDEOTERM", 64),
    ("VSAM", 3),
    ("VTAM", 60),
    ("WAIT", 340),
    ("WAITFORGET", 622),
    ("WARMSTART", 267),
    ("XM", 123),
    ("XNOTDONE", 144),
    ("XOK", 143),
    ("ZCPTRACE", 364),
];

/// `DFHRESP(name)` condition codes.
pub static DFHRESP_OPERANDS: LazyLock<FxHashMap<&'static str, i32>> =
    LazyLock::new(|| DFHRESP_ENTRIES.iter().copied().collect());

/// `DFHVALUE(name)` CVDA codes.
pub static DFHVALUE_OPERANDS: LazyLock<FxHashMap<&'static str, i32>> =
    LazyLock::new(|| DFHVALUE_ENTRIES.iter().copied().collect());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_known_entries() {
        assert_eq!(DFHRESP_OPERANDS.get("NORMAL"), Some(&0));
        assert_eq!(DFHRESP_OPERANDS.get("NOTFND"), Some(&13));
        assert_eq!(DFHVALUE_OPERANDS.get("ACQUIRED"), Some(&69));
        assert!(DFHRESP_OPERANDS.get("NOSUCH").is_none());
    }

    #[test]
    fn test_table_sizes() {
        assert!(DFHRESP_ENTRIES.len() > 120);
        assert!(DFHVALUE_ENTRIES.len() > 400);
    }
}

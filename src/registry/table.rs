//! Known resource types, sorted by type hash.

use super::TypeInfo;

/// Every registered `(hash, type name, extension)` triple, ascending by hash.
pub(crate) static TYPES: [TypeInfo; 523] = [
    TypeInfo::new(0x0026E7FF, "rChainCol", ".ccl"),
    TypeInfo::new(0x00311B28, "rSoundDemoEnvControlNative", ".sdec"),
    TypeInfo::new(0x0066CA70, "rCheatCheckTableRangeNative", ".cctr"),
    TypeInfo::new(0x012EC25E, "rTalkDemoEffectDataNative", ".tdmeff"),
    TypeInfo::new(0x0199CB45, "rMarkerDataNative", ".mkr"),
    TypeInfo::new(0x01A40B82, "rAgingBtlEnemySetTableNative", ".abest"),
    TypeInfo::new(0x02178810, "rGroundAdjustment", ".gar"),
    TypeInfo::new(0x0234545C, "rBCATAppDataNative", ".bcatData"),
    TypeInfo::new(0x02358E1A, "rShaderPackage", ".spkg"),
    TypeInfo::new(0x02833703, "rEffectStrip", ".efs"),
    TypeInfo::new(0x02875F0E, "rCheatCheckTableWeaponTwoNative", ".cctwt"),
    TypeInfo::new(0x02C110D1, "rDungeonNestRarenessDataNative", ".dnrd"),
    TypeInfo::new(0x02F8F1F3, "rConditionNameDataNative", ".cnd"),
    TypeInfo::new(0x02FC82FE, "rShopDataNative", ".shp"),
    TypeInfo::new(0x0315E81F, "rSoundDirectionalSet", ".sdsr"),
    TypeInfo::new(0x0330C7DF, "rMetaSetXml", ".mst.xml"),
    TypeInfo::new(0x037FFA39, "rAgingCheckBuddyNative", ".acb"),
    TypeInfo::new(0x03A1C0B4, "rVsPrizeDataNative", ".vsprize"),
    TypeInfo::new(0x0436326C, "rSoundObjectDataNative", ".sod"),
    TypeInfo::new(0x0437BCF2, "rGrassWind", ".grw"),
    TypeInfo::new(0x049F01BD, "rWeaponGimmickInfo", ".wgi"),
    TypeInfo::new(0x04A36671, "rExpeditionFieldDataNative", ".exfd"),
    TypeInfo::new(0x04B7E501, "rCharaRemakeTicketDataNative", ".crd"),
    TypeInfo::new(0x04BC6D2C, "rFieldEnemyPlanDataNative", ".fedpl"),
    TypeInfo::new(0x057C6D7D, "rOptionParamDataNative", ".opd"),
    TypeInfo::new(0x062C625E, "rCnsParentN", ".pan"),
    TypeInfo::new(0x064A3AD8, "rSoundSpeakerSetXml", ".sssr.xml"),
    TypeInfo::new(0x0656D874, "rEditHairstyleDataNative", ".ehd"),
    TypeInfo::new(0x069B081E, "rFieldEnemySetDataNative", ".fesd"),
    TypeInfo::new(0x06A2A153, "rBattleNavirouFsmTableNative", ".bnft"),
    TypeInfo::new(0x06A7028B, "rStaffRollCutDataNative", ".srcd"),
    TypeInfo::new(0x06CBC2AF, "rCharaCustomLogDataNative", ".chcl"),
    TypeInfo::new(0x06D5BFEA, "rDLCRegionTnmntTableNative", ".dtnmt"),
    TypeInfo::new(0x0733327E, "rGuiTraditionBuddyParamNative", ".gtbp"),
    TypeInfo::new(0x07437CCE, "rSoundAttributeSe", ".aser"),
    TypeInfo::new(0x078DCD77, "rDemoGalleryDataNative", ".dgd"),
    TypeInfo::new(0x07B8BCDE, "rFacialAnimation", ".fca"),
    TypeInfo::new(0x07BF8C95, "rResourceNameForDevNative", ".rnmd"),
    TypeInfo::new(0x07F768AF, "rGUIIconInfo", ".gii"),
    TypeInfo::new(0x07FA7E9B, "rCheatCheckTableBuddyFlagNative", ".cctbf"),
    TypeInfo::new(0x084D7EE4, "rShortDemoDataNative", ".sdm"),
    TypeInfo::new(0x086AEE8E, "rShadowParamNative", ".swp"),
    TypeInfo::new(0x08EB942A, "rGuiFontDataNative", ".fnd"),
    TypeInfo::new(0x08FD201C, "rRiderNoteThumbnailDataNative", ".rntd"),
    TypeInfo::new(0x091F3631, "rGUIStyle", ".gst"),
    TypeInfo::new(0x09481374, "rGuiNpcModelParamNative", ".gnpc"),
    TypeInfo::new(0x0998EE97, "rNpc2dFaceTexTableNative", ".nft"),
    TypeInfo::new(0x09C7CCF3, "rGeneEditNative", ".ged"),
    TypeInfo::new(0x09DBFB28, "rEquiprShopDataNative", ".eshd"),
    TypeInfo::new(0x09E6B5F0, "rShader2", ".mfx"),
    TypeInfo::new(0x0AD816B6, "rPlayerMoveConfigData", ".pmc"),
    TypeInfo::new(0x0B25C4B5, "rFieldEnemyDefaultAifsmDataNaitive", ".fedad"),
    TypeInfo::new(0x0B5594EF, "rBattlePartsConditionDataNative", ".bptcnd"),
    TypeInfo::new(0x0B684D5F, "rFieldBuddyMotionDataNative", ".fbd"),
    TypeInfo::new(0x0B9A0D12, "rObjectModelAttachInfoNative", ".omi"),
    TypeInfo::new(0x0BC2A5D1, "rStatusChangeFlagsNative", ".scf"),
    TypeInfo::new(0x0C59AB00, "rGeneLottingNative", ".glt"),
    TypeInfo::new(0x0CA6BA1A, "rNpcTalkNative", ".ntk"),
    TypeInfo::new(0x0D59F482, "rVsItemSetDataNative", ".vsitemset"),
    TypeInfo::new(0x0DA676A1, "rPresetParamNative", ".tpp"),
    TypeInfo::new(0x0DF1E4CD, "rGatherSetTableDataNative", ".gstd"),
    TypeInfo::new(0x0E308EAC, "rPresetParamEquipNative", ".tppe"),
    TypeInfo::new(0x0E3FC0E5, "rUnlockMixDataNative", ".ulm"),
    TypeInfo::new(0x0E67C162, "rSoundFSMCommandBgmDataNative", ".sfcbd"),
    TypeInfo::new(0x0E7173D9, "rMelynxShopDataNative", ".msp"),
    TypeInfo::new(0x0ECD7DF4, "rSoundCurveSet", ".scsr"),
    TypeInfo::new(0x0EDCD859, "rUnlockProgressDataNative", ".ulp"),
    TypeInfo::new(0x0F43F1A7, "rMonsterLookAtParamNative", ".mlka"),
    TypeInfo::new(0x0FBC2F41, "rRiderNoteLargeCategoryDataNative", ".rnld"),
    TypeInfo::new(0x101B237C, "rInstanceDrawDistance", ".idd"),
    TypeInfo::new(0x10207017, "rDungeonEnemyFixedDataNative", ".defd"),
    TypeInfo::new(0x1075BA2A, "rBattleArenaDLCTableNative", ".badt"),
    TypeInfo::new(0x10A7BB93, "rFieldPartsInfoNative", ".fpi"),
    TypeInfo::new(0x10A9B96B, "rTalkDemoCut", ".cut"),
    TypeInfo::new(0x11486D83, "rEditEyeShapeDataNative", ".eed"),
    TypeInfo::new(0x11659F42, "rConditionPriorityDataNative", ".cndp"),
    TypeInfo::new(0x116EB840, "rWeaponKindOfsNative", ".wko"),
    TypeInfo::new(0x1172DADC, "rTalkDemoViewSpriteDataNative", ".tdvs"),
    TypeInfo::new(0x11C35522, "rGrass2", ".gr2"),
    TypeInfo::new(0x11D02A25, "rDLCItemTableNative", ".ditemp"),
    TypeInfo::new(0x11FEDACA, "rPresetParamCharaCustomNative", ".tppcc"),
    TypeInfo::new(0x12402250, "rGuiMonsterModelParamNative", ".gmmp"),
    TypeInfo::new(0x125E09BD, "rFieldConnectionInfoNative", ".fci"),
    TypeInfo::new(0x126AD8E0, "rMovie", ".ext"),
    TypeInfo::new(0x12935778, "rFldPlParam_ARNative", ".fppar"),
    TypeInfo::new(0x1296F4C9, "rObjectModelAttachGroupNative", ".omg"),
    TypeInfo::new(0x12D2A5C1, "rDLCTableNative", ".dlc"),
    TypeInfo::new(0x12E98C07, "rSoundGuiSe", ".sgs"),
    TypeInfo::new(0x1431F1B8, "rUnlockScriptDataNative", ".uls"),
    TypeInfo::new(0x14AEF07F, "rRiderNotePageDataNative", ".rnpd"),
    TypeInfo::new(0x15B493A9, "rCnsRotateLimit", ".lim"),
    TypeInfo::new(0x15D14528, "rEditColorPresetDataNative", ".ecp"),
    TypeInfo::new(0x15D782FB, "rSoundBank", ".sbkr"),
    TypeInfo::new(0x15FC0096, "rSubStEpiDataNative", ".ssed"),
    TypeInfo::new(0x161002ED, "rTutorialArrowDataNative", ".tad"),
    TypeInfo::new(0x1657A2D0, "rSoundPronounceList", ".sptl"),
    TypeInfo::new(0x16775764, "rAgingFieldPatrolDataNative", ".afpd"),
    TypeInfo::new(0x167DBBFF, "rSoundStreamRequest", ".stqr"),
    TypeInfo::new(0x1688C822, "rBattleAtkNative", ".btat"),
    TypeInfo::new(0x16C480A2, "rGameMessageDataNative", ".grmd"),
    TypeInfo::new(0x173B3F48, "rGuiStatusPlayerParamNative", ".gspp"),
    TypeInfo::new(0x1762062B, "rKizunaLvProgressDataNative", ".klpd"),
    TypeInfo::new(0x17911A85, "rItemDataNative", ".itm"),
    TypeInfo::new(0x179ADABE, "rDemoDataNative", ".dmd"),
    TypeInfo::new(0x17A69ACE, "rMovieOnMemoryInterMediate", ".mem.wmv"),
    TypeInfo::new(0x1821393E, "rHabitatDataNative", ".hbt"),
    TypeInfo::new(0x184D9145, "rEditFaceShapeDataNative", ".efd"),
    TypeInfo::new(0x186248A2, "rBattleCmdIgnoreEnemyDataNative", ".bcige"),
    TypeInfo::new(0x18C80D7A, "rFieldNpcNekoTaxiList", ".fntl"),
    TypeInfo::new(0x18D25FEC, "rConditionChangeInfo", ".ccinfo"),
    TypeInfo::new(0x19059F4C, "rMedalDataListNative", ".mdl"),
    TypeInfo::new(0x190FEE2A, "rTrialCleanNativeDataNative", ".tcn"),
    TypeInfo::new(0x19169E2E, "rFieldSkyDataNative", ".fldsky"),
    TypeInfo::new(0x19283BB2, "rMonsterEnumConversionTableNative", ".mectd"),
    TypeInfo::new(0x19728E41, "rPresetParamLearningSkillSetNative", ".tppls"),
    TypeInfo::new(0x19CBC725, "rBattleSelectSetData", ".bsset"),
    TypeInfo::new(0x1AAED135, "rNpcSetMotionDataNative", ".nsmd"),
    TypeInfo::new(0x1AD7410B, "rCnsParent", ".par"),
    TypeInfo::new(0x1AE50150, "rVertices", ".vts"),
    TypeInfo::new(0x1AEDB3A9, "rTalkDataNative", ".tlk"),
    TypeInfo::new(0x1AEFDEBA, "rGatherCommentDataNative", ".gcd"),
    TypeInfo::new(0x1B00E427, "rItemIconNative", ".iic"),
    TypeInfo::new(0x1B028405, "rKizunaStoneOfsNative", ".kofb"),
    TypeInfo::new(0x1B074932, "rFurattoFieldDataNative", ".fofd"),
    TypeInfo::new(0x1B2A7235, "rSoundNpcVoicePathDataNative", ".snvpd"),
    TypeInfo::new(0x1B883C38, "rBattleBinary", ".btb"),
    TypeInfo::new(0x1BCC4966, "rSoundRequest", ".srqr"),
    TypeInfo::new(0x1C082E56, "rGuiLocalizeTextureDataNative", ".ltd"),
    TypeInfo::new(0x1C1A9E75, "rSkillCalcNative", ".skc"),
    TypeInfo::new(0x1C6E8BEF, "rBattleEnemyTblNative", ".bemt"),
    TypeInfo::new(0x1C7E2497, "rCheatCheckTableGeneNative", ".cctg"),
    TypeInfo::new(0x1C87EF02, "rWeaponParamNative", ".wpp"),
    TypeInfo::new(0x1D17ECF4, "rNestEggReviewANative", ".nstera"),
    TypeInfo::new(0x1D6CAB29, "rSequenceCameraList", ".scl"),
    TypeInfo::new(0x1D7CC46E, "rGatherLevelTableNative", ".ghlt"),
    TypeInfo::new(0x1D8CC9B7, "rFieldObjectList", ".fol"),
    TypeInfo::new(0x1E7613E9, "rBattleEventTblNative", ".bet"),
    TypeInfo::new(0x1E85E006, "rISC", ".isc"),
    TypeInfo::new(0x1EB3767C, "rSoundPhysicsRigidBody", ".sprr"),
    TypeInfo::new(0x1EB79437, "rWeaponDataNative", ".wpd"),
    TypeInfo::new(0x1EF5E639, "rConvexHull", ".hul"),
    TypeInfo::new(0x1F2B4B7B, "rStoryFlagDataNative", ".stfd"),
    TypeInfo::new(0x1F590DAF, "rAgingBtlStageTableNative", ".abst"),
    TypeInfo::new(0x1FA3FF7A, "rNpcAirouSetResourceLogDataNative", ".nasl"),
    TypeInfo::new(0x1FDC33D3, "rGeneralFlagDataNative", ".gfd"),
    TypeInfo::new(0x20098DFF, "rMonsterBaseInfoDataNative", ".mbi"),
    TypeInfo::new(0x208E1CAD, "rModelInPath", ".mip"),
    TypeInfo::new(0x20B4A451, "rEggBaseColorDataNative", ".ebc"),
    TypeInfo::new(0x20ED9750, "rProofEffectParamScript", ".pep"),
    TypeInfo::new(0x215E5305, "rVirtualJoint", ".vjr"),
    TypeInfo::new(0x21684FE4, "rColorLinkColor", ".clc"),
    TypeInfo::new(0x21976A47, "cInstancingResource", ".ext"),
    TypeInfo::new(0x219D9E77, "rFieldPredatorDataNative", ".fprd"),
    TypeInfo::new(0x21C6046E, "rCheatCheckTableItemBattleNative", ".cctib"),
    TypeInfo::new(0x2220C447, "rBattleEnemyTblPlanNative", ".bemtp"),
    TypeInfo::new(0x22948394, "rGUI", ".gui"),
    TypeInfo::new(0x2303B203, "rBattleCommonResourceNative", ".bcmr"),
    TypeInfo::new(0x23158686, "rOptionKeyConfigKeyboardDataNative", ".okkd"),
    TypeInfo::new(0x232E228C, "rSoundReverb", ".revr"),
    TypeInfo::new(0x2350E584, "rCollisionObj", ".obc"),
    TypeInfo::new(0x235EF471, "rDifficultyConvertCountNative", ".dcc"),
    TypeInfo::new(0x23BB8B11, "rMixFlagNative", ".mxf"),
    TypeInfo::new(0x241F5DEB, "rTexture", ".tex"),
    TypeInfo::new(0x242BB29A, "rGUIMessage", ".gmd"),
    TypeInfo::new(0x2540634D, "rSoundWeaponDataNative", ".swd"),
    TypeInfo::new(0x254309C9, "rProofEffectMotSequenceList", ".psl"),
    TypeInfo::new(0x255D51CD, "rSoundSourceOggVorbis", ".sngw"),
    TypeInfo::new(0x257D2F7C, "rSwingModel", ".swm"),
    TypeInfo::new(0x25FA21CB, "rAIWayPointGraph", ".gway"),
    TypeInfo::new(0x26329CC2, "rCheatCheckTableWeaponBowNative", ".cctbw"),
    TypeInfo::new(0x266AF93D, "rIconStatusDataNative", ".isd"),
    TypeInfo::new(0x2672F2D4, "rGeometry3", ".geo3"),
    TypeInfo::new(0x26FB3D96, "rBattleEnemySetNative", ".bes"),
    TypeInfo::new(0x271D08FE, "rSoundSequenceSe", ".ssqr"),
    TypeInfo::new(0x27257D0A, "rRiderNoteDataNative", ".rnd"),
    TypeInfo::new(0x2739B57C, "rGrass", ".grs"),
    TypeInfo::new(0x2749C8A8, "rMaterial", ".mrl"),
    TypeInfo::new(0x27662FAE, "rFacialPartsControl", ".fpctl"),
    TypeInfo::new(0x276DE8B7, "rEffect2D", ".e2d"),
    TypeInfo::new(0x2773EE01, "rSoundDemoControlNative", ".sdc"),
    TypeInfo::new(0x279D506C, "rMetaSet", ".mst"),
    TypeInfo::new(0x27A0C810, "rStEpiDataNative", ".sed"),
    TypeInfo::new(0x27AB4075, "rConstraint", ".ext"),
    TypeInfo::new(0x27E64187, "rNpcMessageDataNative", ".ntlkd"),
    TypeInfo::new(0x28017861, "rCheatCheckTableNaviAccNative", ".cctna"),
    TypeInfo::new(0x282BA529, "rFixedDungeonConfigDataNative", ".fdcd"),
    TypeInfo::new(0x28476FD4, "rFldPlParam_WRNative", ".fppwr"),
    TypeInfo::new(0x286D5FB5, "uSceneCapture::rCaptureTexture", ".tex"),
    TypeInfo::new(0x28AA3E01, "rGuiParamNative", ".gpm"),
    TypeInfo::new(0x28C32975, "rTalkDemoScript", ".tdms"),
    TypeInfo::new(0x28ED7E01, "rBattlePlayerTblNative", ".bplt"),
    TypeInfo::new(0x28EF4AB5, "rDungeonCreatePatternNative", ".dcp"),
    TypeInfo::new(0x28F2C1EC, "rGuiHatchBabyParamNative", ".ghbp"),
    TypeInfo::new(0x29326572, "rEggUniquePatternDataNative", ".eup"),
    TypeInfo::new(0x294E9E8A, "rShaderCache", ".sch"),
    TypeInfo::new(0x29655734, "rOptionLanguageDataNative", ".lad"),
    TypeInfo::new(0x29A004E2, "rArmorDataNative", ".ard"),
    TypeInfo::new(0x29A5C1D1, "rRideParamNative", ".rdp"),
    TypeInfo::new(0x29BCEBBA, "rCheatCheckTableAccSkillNative", ".cctas"),
    TypeInfo::new(0x29DA6D56, "rSubQuestVeilDataNative", ".svd"),
    TypeInfo::new(0x2A2C6685, "rMaterialDataNative", ".matd"),
    TypeInfo::new(0x2AA25C85, "rNavirouGuideDataNative", ".ngt"),
    TypeInfo::new(0x2B40AE8F, "rSoundEQ", ".equr"),
    TypeInfo::new(0x2B73DB4A, "rTalkDemoWorkOriginInfo", ".work"),
    TypeInfo::new(0x2B84E1A5, "rAgingCheckPlArmorNative", ".acpa"),
    TypeInfo::new(0x2CFFF669, "rNestEggReviewBNative", ".nsterb"),
    TypeInfo::new(0x2D462600, "rGUIFont", ".gfd"),
    TypeInfo::new(0x2D4CF80A, "rColorLinkInfo", ".cli"),
    TypeInfo::new(0x2DAF8237, "rStPrComDataNative", ".spcd"),
    TypeInfo::new(0x2DEB5F94, "rObjectModelAttachSetData", ".omas"),
    TypeInfo::new(0x2E26B658, "rCheatCheckTableWeaponHueNative", ".ccthu"),
    TypeInfo::new(0x2EB8B01E, "rDramaMessageDataNative", ".drmd"),
    TypeInfo::new(0x2F30E0CC, "rDLCVsRuleTableNative", ".dvsrule"),
    TypeInfo::new(0x2FCCD32C, "rSystemFlagDataNative", ".sfd"),
    TypeInfo::new(0x2FE088C0, "rDollPartsDisp", ".dpd"),
    TypeInfo::new(0x301B1691, "rGuiWorldMapNative", ".gwm"),
    TypeInfo::new(0x30636087, "rAgingCheckWeaponNative", ".acwp"),
    TypeInfo::new(0x3077B6C2, "rSoundArmorDataNative", ".sad"),
    TypeInfo::new(0x3095892D, "rNpcTalkZoneNative", ".ntz"),
    TypeInfo::new(0x30FC745F, "rSoundSubMixer", ".smxr"),
    TypeInfo::new(0x3187A8E3, "rFieldSpotDataNative", ".flds"),
    TypeInfo::new(0x31A91DA3, "rAI", ".ais"),
    TypeInfo::new(0x31AD60F1, "rSkillSetDataNative", ".wss"),
    TypeInfo::new(0x31E3F091, "rEditParamDataNative", ".epd"),
    TypeInfo::new(0x31EDC625, "rSoundPhysicsJoint", ".spjr"),
    TypeInfo::new(0x31F693D6, "rMovieOnDisk", ".wmvd"),
    TypeInfo::new(0x31FDE194, "rFieldDirectionInfoNative", ".fdi"),
    TypeInfo::new(0x32076CDC, "rBattleVsPorchPresetNative", ".bvspp"),
    TypeInfo::new(0x324E3203, "rFieldSchedulerSetDataNative", ".fssd"),
    TypeInfo::new(0x3252FEF2, "rFurattoTrendDataNative", ".fotd"),
    TypeInfo::new(0x3254B136, "rGeneRandomSetNative", ".grset"),
    TypeInfo::new(0x3366F207, "rFacialPartsComboNative", ".fpc"),
    TypeInfo::new(0x33ACCAF2, "rBattleStageResourceNative", ".bstr"),
    TypeInfo::new(0x33C07B1F, "rTalkDemoFaceDataNative", ".tdmfc"),
    TypeInfo::new(0x33C9FCC8, "rSubstituteNpcTblNative", ".sntt"),
    TypeInfo::new(0x33CD0EC5, "rMenuRiderNoteDataNative", ".mrnd"),
    TypeInfo::new(0x33FAD761, "rCheatCheckTableArmorNative", ".ccta"),
    TypeInfo::new(0x33FCB6EA, "rDoubleKizunaSchedulerPathNative", ".bdkd"),
    TypeInfo::new(0x3479A5C2, "rMonsterBookDataNative", ".mbd"),
    TypeInfo::new(0x34AD0DEF, "rReactionCommentDataNative", ".rcd"),
    TypeInfo::new(0x3565348B, "rMergeStreamDataNative", ".asd"),
    TypeInfo::new(0x358012E8, "rVibration", ".vib"),
    TypeInfo::new(0x35DC8912, "rBattleNavirouUniqueNative", ".bnut"),
    TypeInfo::new(0x35FA3632, "rFieldGateDataNative", ".fgd"),
    TypeInfo::new(0x36FFE6A5, "rDLCViewDataNative", ".dlcView"),
    TypeInfo::new(0x37CBA824, "rBattleCutCmdData", ".bccmd"),
    TypeInfo::new(0x37E65EAF, "rMonsterRankTableNative", ".mrt"),
    TypeInfo::new(0x3876D6FA, "rNpcSetResourceLogDataNative", ".npsl"),
    TypeInfo::new(0x38D6B69A, "rSubQuestCountDataNative", ".sqcd"),
    TypeInfo::new(0x38FB2FAD, "rFieldHuntingDataNative", ".fhd"),
    TypeInfo::new(0x39C52040, "rCameraList", ".lcm"),
    TypeInfo::new(0x39D627D8, "rCommandIconNative", ".cic"),
    TypeInfo::new(0x3A19C551, "rOptionSettingDataNative", ".osd"),
    TypeInfo::new(0x3A96D8A0, "rSoundDirectionalCurveXml", ".sdcr.xml"),
    TypeInfo::new(0x3B0A54EE, "rCheatCheckTableBuddyNative", ".cctb"),
    TypeInfo::new(0x3BC16262, "rExpeditionSlotNumDataNative", ".esd"),
    TypeInfo::new(0x3C14D076, "rSoundAreaReverb", ".sar"),
    TypeInfo::new(0x3C1A0CA5, "rStoryCountDataNative", ".scod"),
    TypeInfo::new(0x3C52BC0C, "rActionCommandDelayTimeDataNative", ".acdd"),
    TypeInfo::new(0x3C6F8994, "rFieldCamera", ".fcr"),
    TypeInfo::new(0x3D13CFE8, "rAccessorySkillNative", ".acs"),
    TypeInfo::new(0x3D683C5B, "rCloud", ".cld"),
    TypeInfo::new(0x3E0193EF, "rMelynxShopAccessoryDataNative", ".macd"),
    TypeInfo::new(0x3E063F35, "rFieldPlayerMotionDataNative", ".fpm"),
    TypeInfo::new(0x3E356F93, "rStarCatalog", ".stc"),
    TypeInfo::new(0x3E363245, "rChain", ".chn"),
    TypeInfo::new(0x3F53ECC9, "rMonsterPartsDisp", ".mpd"),
    TypeInfo::new(0x3F9E5DFD, "rFieldEnemyPathDataNative", ".fedpa"),
    TypeInfo::new(0x3FAC66BE, "rGiftBuddyTableNative", ".tgb"),
    TypeInfo::new(0x3FBA418F, "rBattleEventResourceDataNative", ".bert"),
    TypeInfo::new(0x4007C0E2, "rPotEffectDataNative", ".pte"),
    TypeInfo::new(0x4026A46F, "rGiftEggTableNative", ".tge"),
    TypeInfo::new(0x402E3FC6, "rFieldCommonMessageDataNative", ".fcmd"),
    TypeInfo::new(0x406E4FBC, "rPresetParamPlayerNative", ".tppp"),
    TypeInfo::new(0x407448E4, "rGuiColorDataNative", ".gcol"),
    TypeInfo::new(0x40F45E76, "rEncntEnemyPartyNative", ".eepd"),
    TypeInfo::new(0x412DC7EA, "rMonsterAdditionalShowTableNative", ".mas"),
    TypeInfo::new(0x41AE22A4, "rTalkMsgDataNative", ".tmd"),
    TypeInfo::new(0x41E7512F, "rRiderNoteSmallCategoryDataNative", ".rnsd"),
    TypeInfo::new(0x4223A8D7, "rSoundInfoSeNative", ".siet"),
    TypeInfo::new(0x42758339, "rPresetParamOtomonGeneNative", ".tppog"),
    TypeInfo::new(0x42CB8E44, "rStoryQuestDataNative", ".sqd"),
    TypeInfo::new(0x4323D83A, "rSceneTexture", ".stex"),
    TypeInfo::new(0x436FD8ED, "rSubQuestConditionDataNative", ".sqccd"),
    TypeInfo::new(0x43BBF87C, "rNavirouAccessoryDataNative", ".nad"),
    TypeInfo::new(0x445F93C9, "rFieldPartsLayoutNative", ".fpl"),
    TypeInfo::new(0x44C7D091, "rEditCameraDataNative", ".ecd"),
    TypeInfo::new(0x450EF4F9, "rDungeonContainsDataNative", ".dcd"),
    TypeInfo::new(0x463A19D2, "rBreakFieldObjectDataNative", ".bfofd"),
    TypeInfo::new(0x465CB860, "rSoundSourcePC", ".ext"),
    TypeInfo::new(0x46810940, "rSoundEngineValue", ".egvr"),
    TypeInfo::new(0x46A2B0AB, "rFieldNpcMotionNative", ".fnmd"),
    TypeInfo::new(0x46B4BB18, "rSoundArchiveDataNative", ".samd"),
    TypeInfo::new(0x483E4D9D, "rEditMouthShapeDataNative", ".emod"),
    TypeInfo::new(0x4860C9D3, "rVsRuleDataNative", ".vsrule"),
    TypeInfo::new(0x4868DCCC, "rCnsScaleNormalize", ".scnl"),
    TypeInfo::new(0x49252F6A, "rSystemCountDataNative", ".sycd"),
    TypeInfo::new(0x494935A5, "rStoryQuestDefineNative", ".sqdf"),
    TypeInfo::new(0x494EA0DD, "rChestItemTableDataNative", ".cfid"),
    TypeInfo::new(0x49B5A885, "rSoundSimpleCurve", ".sscr"),
    TypeInfo::new(0x4A06C178, "rCnsJointOffset", ".jof"),
    TypeInfo::new(0x4A348080, "rBattleNpcTblNative", ".bnt"),
    TypeInfo::new(0x4A8AEAF9, "rLimitedShopPlaceDataNative", ".lshppd"),
    TypeInfo::new(0x4A964019, "rSkillIconNative", ".sic"),
    TypeInfo::new(0x4AB3732A, "rBattleEventResultDataNative", ".berd"),
    TypeInfo::new(0x4B206586, "rAccessoryDataNative", ".acd"),
    TypeInfo::new(0x4BB345D4, "rFldPlParam_NRNative", ".fppnr"),
    TypeInfo::new(0x4C0DB839, "rScheduler", ".sdl"),
    TypeInfo::new(0x4CA26828, "rSoundMotionSe", ".mser"),
    TypeInfo::new(0x4CA2FA66, "rSkillTableNative", ".skt"),
    TypeInfo::new(0x4D14D010, "rDoubleKizunaMonsterOffsetNative", ".bdkm"),
    TypeInfo::new(0x4D97E624, "rSoundSceneVolumeNative", ".ssv"),
    TypeInfo::new(0x4E397417, "rEffectAnim", ".ean"),
    TypeInfo::new(0x4EAC1F02, "rAgingCheckNaviAccesoryNative", ".acna"),
    TypeInfo::new(0x4ECAB145, "rBattleResultBonusNative", ".brsb"),
    TypeInfo::new(0x4F1544F5, "rNavirouPartsDisp", ".npd"),
    TypeInfo::new(0x4F58C2FF, "rGuiFontLanguageDataNative", ".gfld"),
    TypeInfo::new(0x4FBA8F45, "rAgingCheckEnaLayArmorNative", ".acela"),
    TypeInfo::new(0x50475E5B, "rIDColor", ".idcol"),
    TypeInfo::new(0x50575ABF, "rMapMarkerNative", ".mmk"),
    TypeInfo::new(0x507ADA8A, "rTalkDemoMotionDataNative", ".tdmmot"),
    TypeInfo::new(0x50FE2B3B, "rCameraData", ".cmdt"),
    TypeInfo::new(0x5175C242, "rGeometry2", ".geo2"),
    TypeInfo::new(0x518D06AD, "rTalkDemoDataNative", ".tdmd"),
    TypeInfo::new(0x51A88271, "rDungeonInfoListNative", ".dai"),
    TypeInfo::new(0x51D84CF7, "rBuddyPlanDataNative", ".bdypl"),
    TypeInfo::new(0x51FC779F, "rCollision", ".sbc"),
    TypeInfo::new(0x522BB63A, "rFieldMotionPackageDataNative", ".fmpd"),
    TypeInfo::new(0x524F8808, "rGalleryFlagDataNative", ".gfd"),
    TypeInfo::new(0x526665B7, "rCnsTinyIK", ".tik"),
    TypeInfo::new(0x535D969F, "rCnsTinyChain", ".ctc"),
    TypeInfo::new(0x536D72D2, "rSoundMonsterEnvironmentalDataNative", ".smed"),
    TypeInfo::new(0x5370C6B4, "rDungeonEnemyLocatorDataNative", ".deloc"),
    TypeInfo::new(0x538120DE, "rSoundEngine", ".engr"),
    TypeInfo::new(0x53949DD5, "rOptionKeyConfigDataNative", ".okd"),
    TypeInfo::new(0x53B0B9BD, "rAccessoryRareNative", ".acr"),
    TypeInfo::new(0x5441B2F9, "rFieldPartsDataNative", ".fpd"),
    TypeInfo::new(0x54521303, "rDLCSubQuestDataNative", ".dsuqd"),
    TypeInfo::new(0x54775FD5, "rCallingEncountDataNative", ".sce"),
    TypeInfo::new(0x54DD639F, "rPartsVisibleInfo", ".pvi"),
    TypeInfo::new(0x54FC5EFF, "rFldPlParam_GRNative", ".fppgr"),
    TypeInfo::new(0x552A3C4F, "rFieldMotionDataNative", ".fmd"),
    TypeInfo::new(0x5554B934, "rInstancePlacement", ".ipr"),
    TypeInfo::new(0x55569AA8, "rTalkDemoDefineDataNative", ".tdmspk"),
    TypeInfo::new(0x560F4EFE, "rDifficultyConvertGameFlagNative", ".dcgf"),
    TypeInfo::new(0x5664C347, "rCardPose", ".cps"),
    TypeInfo::new(0x573D6A94, "rDoubleKizunaMonsterConditionNative", ".bdkmc"),
    TypeInfo::new(0x5842F0B0, "rSoundPelTiedSe", ".pts"),
    TypeInfo::new(0x58599F3D, "rOtomonCameraParamNative", ".ocpd"),
    TypeInfo::new(0x58A15856, "rModel", ".mod"),
    TypeInfo::new(0x58EC7A6F, "rGuiClearedDungeonItemParamNative", ".cdi"),
    TypeInfo::new(0x591C06BF, "rWorldMapMaskDataNative", ".wmmd"),
    TypeInfo::new(0x592D804B, "rSoundCurveXml", ".scvr.xml"),
    TypeInfo::new(0x59C9EC08, "rHardDungeonUIDataNative", ".hdu"),
    TypeInfo::new(0x59EE2276, "rAIFSMList", ".fsl"),
    TypeInfo::new(0x5A002F31, "rLinkPrizeDataNative", ".lpd"),
    TypeInfo::new(0x5A11B83A, "uSoundSubMixer::CurrentSubMixer", ".smxr"),
    TypeInfo::new(0x5A24DD60, "rDoubleKizunaCameraOffsetNative", ".bdkc"),
    TypeInfo::new(0x5A525C16, "rProofEffectList", ".pel"),
    TypeInfo::new(0x5A5F6394, "rMonsterIconNative", ".mic"),
    TypeInfo::new(0x5A7A72DE, "rLimitedShopNpcList", ".lsnl"),
    TypeInfo::new(0x5A7FEA62, "rCnsIK", ".ik"),
    TypeInfo::new(0x5ABE83BD, "rStoryTalkBalloonNative", ".stb"),
    TypeInfo::new(0x5AD1695D, "rTutorialLockDataNative", ".tld"),
    TypeInfo::new(0x5B062235, "rDLCAppDataNative", ".dlcData"),
    TypeInfo::new(0x5B4EED89, "rTalkDemoPoseDataNative", ".tdmpos"),
    TypeInfo::new(0x5B9300CB, "rTalkDemoSound", ".tsnd"),
    TypeInfo::new(0x5B9EB03F, "rHatchEggBonusDataNative", ".heb"),
    TypeInfo::new(0x5BB9FA2D, "rPotLevelDataNative", ".ptl"),
    TypeInfo::new(0x5CDD1F19, "cResource", ".ext"),
    TypeInfo::new(0x5CF2ED04, "rSummaryDataNative", ".smr"),
    TypeInfo::new(0x5D2BC52B, "rSoundInfoStreamNative", ".siets"),
    TypeInfo::new(0x5D7177C7, "rLimitedShopDataNative", ".lshpd"),
    TypeInfo::new(0x5DACBE91, "rStableCapacityDataNative", ".scd"),
    TypeInfo::new(0x5DCEA23F, "rOccluder2Native", ".occ2"),
    TypeInfo::new(0x5E4DEF9D, "rGeometry2Group", ".geog"),
    TypeInfo::new(0x5E96DB96, "rAgingBtlBuddyTableNative", ".abbt"),
    TypeInfo::new(0x5EA465EB, "rSoundParamOffsetControl", ".spoc"),
    TypeInfo::new(0x5EA7A3E9, "rSky", ".sky"),
    TypeInfo::new(0x5F082723, "rNpcAirouSetMotionDataNative", ".nasmd"),
    TypeInfo::new(0x5F2290EE, "rBattleArenaTableNative", ".bat"),
    TypeInfo::new(0x5F2E8D28, "rBattleWeaponTblNative", ".bwpt"),
    TypeInfo::new(0x5F6335ED, "rAppMovie", ".dat"),
    TypeInfo::new(0x5F6A608B, "rCnsMatrix", ".mtx"),
    TypeInfo::new(0x5F84F7C4, "rMovieOnMemory", ".mem.wmv"),
    TypeInfo::new(0x601BFDF2, "rEnemyCameraParamNative", ".ecpd"),
    TypeInfo::new(0x60A06906, "rStChapDataNative", ".schd"),
    TypeInfo::new(0x60F5FFC4, "rAmiiboGiftNative", ".agt"),
    TypeInfo::new(0x611C6B48, "rExpeditionPolicyDataNative", ".expl"),
    TypeInfo::new(0x6130BC1D, "rGuiMultiVsPlayerParamNative", ".gmvp"),
    TypeInfo::new(0x6143E1BD, "rGraphPatch", ".gpt"),
    TypeInfo::new(0x6158A4A8, "rCollisionHeightField", ".sbch"),
    TypeInfo::new(0x61708880, "rNestMessageNative", ".nstmsg"),
    TypeInfo::new(0x61765CAB, "rFieldAISetActNative", ".fasa"),
    TypeInfo::new(0x6181664E, "rTalkDemoActorDataNative", ".tdmact"),
    TypeInfo::new(0x61E05D38, "rBattleNavirouSetTableNative", ".bnst"),
    TypeInfo::new(0x61E4CC9B, "rOptionKeyConfigButtonDataNative", ".okbd"),
    TypeInfo::new(0x625A3A47, "rGuiModelDrawWindowParamNative", ".gmdw"),
    TypeInfo::new(0x625ED01E, "rSubQuestDataRenewNative", ".suqd"),
    TypeInfo::new(0x62711A14, "rTraceSonarNative", ".ts"),
    TypeInfo::new(0x628DFB41, "rGrass2Setting", ".gr2s"),
    TypeInfo::new(0x62C8CFAA, "rEditMakeupTypeDataNative", ".emad"),
    TypeInfo::new(0x6306D6BD, "rNpcTalkResourceDataNative", ".ntrp"),
    TypeInfo::new(0x632E29AE, "rBattleMorphConditionDataNative", ".bmcnd"),
    TypeInfo::new(0x639890F3, "rBattleStatusEffectNative", ".bseff"),
    TypeInfo::new(0x63DA3782, "rSoundFSMCommandSeDataNative", ".sfcsd"),
    TypeInfo::new(0x642EA19E, "rRiderNoteDataRushNative", ".rndr"),
    TypeInfo::new(0x643683A4, "rSkillFlagNative", ".skf"),
    TypeInfo::new(0x647F6826, "rSoundBgmMonsterDataNative", ".sbmd"),
    TypeInfo::new(0x6497D007, "rGeneralCountDataNative", ".gcd"),
    TypeInfo::new(0x64F03DF3, "rBattleEffHitInfoDataNative", ".behi"),
    TypeInfo::new(0x652A9D2A, "rSoundGuiOperationNative", ".sgo"),
    TypeInfo::new(0x6538C7EE, "rCheatCheckTableWeaponHamNative", ".ccthm"),
    TypeInfo::new(0x6539B0CF, "rBattleMorphChangeDataNative", ".bmcd"),
    TypeInfo::new(0x65CBA083, "rNestHappeningProbNative", ".nhapp"),
    TypeInfo::new(0x6625F2E3, "rSoundMonsterDataNative", ".smd"),
    TypeInfo::new(0x666F5559, "rFieldPlacementObjectSetNative", ".fpos"),
    TypeInfo::new(0x66B45610, "rAIFSM", ".fsm"),
    TypeInfo::new(0x67DE29F7, "rSchedulerPreLoadList", ".spll"),
    TypeInfo::new(0x687D3B6C, "rSoundFootstepDataNative", ".sftd"),
    TypeInfo::new(0x68CD2933, "rMHSoundEmitter", ".ses"),
    TypeInfo::new(0x68F1827C, "rTalkMessageDataNative", ".tlkd"),
    TypeInfo::new(0x691B82B3, "rPostmanRewardDataNative", ".pmrd"),
    TypeInfo::new(0x696C1E0D, "rGuiModelDrawCameraParamNative", ".gmdc"),
    TypeInfo::new(0x69A5C538, "rDeformWeightMap", ".dwm"),
    TypeInfo::new(0x6A5CDD23, "rOccluder", ".occ"),
    TypeInfo::new(0x6A7A1000, "rNekoTaxiStationDataNative", ".nsd"),
    TypeInfo::new(0x6A8232E0, "rDungeonChestLotTableNative", ".dclt"),
    TypeInfo::new(0x6A89DEC9, "rArmorParamNative", ".arp"),
    TypeInfo::new(0x6ABA51B0, "rWeaponOfsForBodyNative", ".wofb"),
    TypeInfo::new(0x6AFA7C26, "rBuddyPathDataNative", ".bdypa"),
    TypeInfo::new(0x6B02A7AF, "rCnsLookAt", ".lat"),
    TypeInfo::new(0x6B203580, "rBattleNaviTextEventNative", ".bte"),
    TypeInfo::new(0x6B592357, "rBattleEnemyFileNative", ".bef"),
    TypeInfo::new(0x6B96F6EC, "rCheatCheckTableWeaponOneNative", ".cctwo"),
    TypeInfo::new(0x6BDCA211, "rBattleBuddyConditionDataNative", ".bbcnd"),
    TypeInfo::new(0x6C4CBF97, "rStoryDataNative", ".std"),
    TypeInfo::new(0x6CBA497B, "rFieldIngredientSetDataNative", ".fisd"),
    TypeInfo::new(0x6D1E7044, "rMonsterPartsTableNative", ".mpt"),
    TypeInfo::new(0x6D2D08F8, "rBroilerFlavorDataNative", ".bfd"),
    TypeInfo::new(0x6D3BA3F2, "rDungeonEnemyLotDataNative", ".deld"),
    TypeInfo::new(0x6D5AE854, "rEffectList", ".efl"),
    TypeInfo::new(0x6D77CAEA, "rSoundMonsterKizunaDataNative", ".smkd"),
    TypeInfo::new(0x6DC15937, "rBattleNavirouMessageNative", ".bnmt"),
    TypeInfo::new(0x6DD0AA68, "rSubQuestFlagDataNative", ".sqfd"),
    TypeInfo::new(0x6E16C5E5, "rTalkDemoCommandDataNative", ".tdmcmd"),
    TypeInfo::new(0x6E171A6E, "rMHSoundSequence", ".mss"),
    TypeInfo::new(0x6E402C69, "rSoundSubMixerXml", ".smxr.xml"),
    TypeInfo::new(0x6EF66649, "rBuddyBtlMCDataNative", ".bdbcm"),
    TypeInfo::new(0x6F4E17A0, "rBattleCmdCameraDataNative", ".bccam"),
    TypeInfo::new(0x6FCC7AD4, "rProofEffectColorControl", ".pec"),
    TypeInfo::new(0x6FE1EA15, "rSoundPhysicsList", ".splr"),
    TypeInfo::new(0x701B8556, "rWipeData", ".wpdt"),
    TypeInfo::new(0x702C6D5B, "rTalkInfoDataNative", ".tid"),
    TypeInfo::new(0x70F5036C, "rFieldDataNative", ".fld"),
    TypeInfo::new(0x70FE7E25, "rCnsLookAtEyeball", ".eye"),
    TypeInfo::new(0x7100EB09, "rDemoFlagDataNative", ".dfd"),
    TypeInfo::new(0x7178C182, "rAppMovieIntermediate", ".wmv"),
    TypeInfo::new(0x71950384, "rMovieOnDiskInterMediate", ".wmvd"),
    TypeInfo::new(0x721B4D01, "rFieldAISetKindNative", ".fask"),
    TypeInfo::new(0x724C1F81, "rEnvCreatureDataNative", ".ecr"),
    TypeInfo::new(0x724DF879, "rSoundSourceMSADPCM", ".xsew"),
    TypeInfo::new(0x727C7279, "rNulls", ".nls"),
    TypeInfo::new(0x72E5DB76, "rEditVoiceTypeDataNative", ".evd"),
    TypeInfo::new(0x7355E446, "rGuiMessageDataNative", ".msgm"),
    TypeInfo::new(0x7370D1FC, "rMHFSMList", ".fslm"),
    TypeInfo::new(0x73850D05, "rArchive", ".arc"),
    TypeInfo::new(0x738D7596, "rTalkSelectDataNative", ".tstd"),
    TypeInfo::new(0x73982D73, "rCheatCheckTableWeaponGunNative", ".cctgn"),
    TypeInfo::new(0x74254971, "rMainQuestDataNative", ".mqsd"),
    TypeInfo::new(0x74652852, "rPresetParamItemNative", ".tppi"),
    TypeInfo::new(0x748CD103, "rPresetParamOtomonNative", ".tppo"),
    TypeInfo::new(0x74931D0C, "rItemMixNative", ".mix"),
    TypeInfo::new(0x74DE10E5, "rEnaJoinProgressDataNative", ".ejpd"),
    TypeInfo::new(0x74E54F38, "rBattleArenaTrialTableNative", ".batt"),
    TypeInfo::new(0x74EB7AD0, "rStatusDataNative", ".sdt"),
    TypeInfo::new(0x7534679E, "rModelEasyAnime", ".mea"),
    TypeInfo::new(0x756AF443, "rFieldAmbientDataNative", ".fldamb"),
    TypeInfo::new(0x75967AD6, "rDynamicSbc", ".dsc"),
    TypeInfo::new(0x761A320D, "rSoundBattleStageDefineNative", ".sbsdef"),
    TypeInfo::new(0x763119DC, "rTalkDemoObjInitPos", ".pos"),
    TypeInfo::new(0x76820D81, "rMotionList", ".lmt"),
    TypeInfo::new(0x76E4AD2A, "rLinkedDungeonDataNative", ".ldd"),
    TypeInfo::new(0x774025A0, "rFortuneGiftNative", ".fgt"),
    TypeInfo::new(0x77426BF0, "rGuiFadeDataNative", ".gfad"),
    TypeInfo::new(0x775141A7, "rBingoBonusCategoryNative", ".bbc"),
    TypeInfo::new(0x77F07A53, "rSoundBattleStageDataNative", ".sbsd"),
    TypeInfo::new(0x7808EA10, "rRenderTargetTexture", ".rtex"),
    TypeInfo::new(0x782288CF, "rSoundNpcDataNative", ".snd"),
    TypeInfo::new(0x783FE90C, "rSoundSystemSetting", ".sss"),
    TypeInfo::new(0x785E6622, "rAIConditionTree", ".cdt"),
    TypeInfo::new(0x78B0DD5A, "rSoundDemoSeControlNative", ".sdsc"),
    TypeInfo::new(0x78B514C3, "rFieldPartsNameDataNative", ".fldpn"),
    TypeInfo::new(0x78E0CAE8, "rMelynxShopArmorDataNative", ".mard"),
    TypeInfo::new(0x790F56DE, "rFieldCamOption", ".fco"),
    TypeInfo::new(0x7913DBFE, "rGuiWeaponModelParamNative", ".gwmp"),
    TypeInfo::new(0x794DECFD, "rPotOfferingDataNative", ".pto"),
    TypeInfo::new(0x7990C468, "rDungeonEnemyHomingDataNative", ".deh"),
    TypeInfo::new(0x79D46143, "rFieldOrnamentSetDataNative", ".fosd"),
    TypeInfo::new(0x79DF35D6, "rRideSkillTableNative", ".rst"),
    TypeInfo::new(0x79FD8E53, "rSoundNpcAirouDataNative", ".snad"),
    TypeInfo::new(0x7A09DD6F, "rReusJoinProgressDataNative", ".rjpd"),
    TypeInfo::new(0x7A197D5B, "rGeneTableNative", ".gtb"),
    TypeInfo::new(0x7A5067AF, "rAchievementIconNative", ".aic"),
    TypeInfo::new(0x7A69D276, "rFieldSetFlagDataNative", ".fsfd"),
    TypeInfo::new(0x7A7A0918, "rAnimationSecondParamNative", ".asp"),
    TypeInfo::new(0x7AEC2C77, "rMyhouseBoxCameraDataNative", ".mbcd"),
    TypeInfo::new(0x7AFE14F5, "rNestHappeningNative", ".nhap"),
    TypeInfo::new(0x7BD0CA86, "rNpcLayeredArmorDataNative", ".nlad"),
    TypeInfo::new(0x7BEC319A, "rSoundPhysicsSoftBody", ".spsr"),
    TypeInfo::new(0x7C7E8CCA, "rSerial", ".srt"),
    TypeInfo::new(0x7C832B6A, "rImplicitSurface", ".is"),
    TypeInfo::new(0x7D640E1F, "rGuiRiderCardBuddyParamNative", ".grcb"),
    TypeInfo::new(0x7DBE0D1C, "rAgingFieldTableNative", ".aft"),
    TypeInfo::new(0x7E6F48C2, "rSoundPlayerVoicePathDataNative", ".spvpd"),
    TypeInfo::new(0x7E70DA14, "rBattleEnemyMCTblNative", ".bemct"),
    TypeInfo::new(0x7E742F6F, "rModTextureNoScaleDataNative", ".mtnscl"),
    TypeInfo::new(0x7EAC0281, "rPotPrayingDataNative", ".ptp"),
    TypeInfo::new(0x7EB33DE7, "rMelynxShopWeaponDataNative", ".mwd"),
    TypeInfo::new(0x7ED4C86C, "rSoundEngineXml", ".engr.xml"),
    TypeInfo::new(0x7F51F399, "rMonsterRaceDataNative", ".mrd"),
    TypeInfo::new(0x7F69BC1C, "rMedalCompRewardNative", ".mcr"),
    TypeInfo::new(0x7F924054, "rDungeonEggMonsterDataNative", ".demd"),
];
